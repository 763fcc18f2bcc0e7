use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    api::ApiClient,
    hooks::{FetchState, Reload, ReloadCounter, RequestGuard},
    models::MonthlySummary,
    month::Month,
};

#[derive(Clone, PartialEq)]
pub struct SummaryHandle {
    /// `Ready(None)` when the server has nothing recorded for the month.
    pub state: FetchState<Option<MonthlySummary>>,
    pub refetch: Callback<()>,
}

impl SummaryHandle {
    pub fn summary(&self) -> Option<&MonthlySummary> {
        self.state.data().and_then(Option::as_ref)
    }
}

/// Totals for `month`, fetched again whenever the month changes or `refetch` is emitted.
#[hook]
pub fn use_summary(client: &ApiClient, month: Month) -> SummaryHandle {
    let state = use_state(|| FetchState::Loading);
    let reload = use_reducer(ReloadCounter::default);

    {
        let state = state.clone();
        let client = client.clone();
        use_effect_with_deps(
            move |(month, _)| {
                let month = *month;
                let guard = RequestGuard::default();
                state.set(FetchState::Loading);

                {
                    let guard = guard.clone();
                    spawn_local(async move {
                        let Some(result) = guard.accept(client.get_summary(month).await) else {
                            log::debug!("Dropping stale summary for {month}");
                            return;
                        };
                        if let Err(err) = &result {
                            if err.is_unauthorized() {
                                log::warn!("Session rejected while loading the summary for {month}");
                            } else {
                                log::error!("Could not load the summary for {month}: {err}");
                            }
                        }
                        state.set(result.into());
                    });
                }

                move || guard.supersede()
            },
            (month, reload.count()),
        );
    }

    let refetch = {
        let reload = reload.dispatcher();
        Callback::from(move |_| reload.dispatch(Reload))
    };

    SummaryHandle {
        state: (*state).clone(),
        refetch,
    }
}
