use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    api::ApiClient,
    hooks::{FetchState, Reload, ReloadCounter, RequestGuard},
    models::TransactionPage,
    month::Month,
};

/// The page the user picked, remembered together with the month it was picked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSelection {
    month: Month,
    page: u32,
}

pub enum PageAction {
    /// The dashboard is showing `Month`. A different month starts over at page 1.
    Show(Month),
    Select(Month, u32),
}

impl PageSelection {
    pub fn new(month: Month, page: u32) -> Self {
        Self {
            month,
            page: page.max(1),
        }
    }

    /// The page to request for `month`. Until the selection has caught up with a month
    /// change this is already page 1.
    pub fn page_for(&self, month: Month) -> u32 {
        if self.month == month {
            self.page
        } else {
            1
        }
    }
}

impl Reducible for PageSelection {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        match action {
            PageAction::Show(month) if month == self.month => self,
            PageAction::Show(month) => Rc::new(PageSelection::new(month, 1)),
            PageAction::Select(month, page) => Rc::new(PageSelection::new(month, page)),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct TransactionsHandle {
    pub state: FetchState<TransactionPage>,
    pub num_pages: u32,
    pub current_page: u32,
    pub set_current_page: Callback<u32>,
    pub refetch: Callback<()>,
}

/// One page of the month's transactions.
///
/// A new request goes out when the month, the selected page or the reload counter changes.
/// The previous request is marked superseded at that point and its response is dropped.
#[hook]
pub fn use_transactions(client: &ApiClient, month: Month) -> TransactionsHandle {
    let state = use_state(|| FetchState::Loading);
    let selection = use_reducer(|| PageSelection::new(month, 1));
    let reload = use_reducer(ReloadCounter::default);
    let page = selection.page_for(month);

    {
        let selection = selection.dispatcher();
        use_effect_with_deps(
            move |month| {
                selection.dispatch(PageAction::Show(*month));
                || ()
            },
            month,
        );
    }

    {
        let state = state.clone();
        let client = client.clone();
        use_effect_with_deps(
            move |(month, page, _)| {
                let (month, page) = (*month, *page);
                let guard = RequestGuard::default();
                state.set(FetchState::Loading);

                {
                    let guard = guard.clone();
                    spawn_local(async move {
                        let result = client.get_transactions(month, page).await;
                        let Some(result) = guard.accept(result) else {
                            log::debug!("Dropping stale transactions for {month} page {page}");
                            return;
                        };
                        if let Err(err) = &result {
                            if err.is_unauthorized() {
                                log::warn!("Session rejected while loading transactions for {month}");
                            } else {
                                log::error!("Could not load transactions for {month}: {err}");
                            }
                        }
                        state.set(result.into());
                    });
                }

                move || guard.supersede()
            },
            (month, page, reload.count()),
        );
    }

    let set_current_page = {
        let selection = selection.dispatcher();
        Callback::from(move |page: u32| selection.dispatch(PageAction::Select(month, page)))
    };

    let refetch = {
        let reload = reload.dispatcher();
        Callback::from(move |_| reload.dispatch(Reload))
    };

    let (num_pages, current_page) = match &*state {
        FetchState::Ready(data) => (data.num_pages, data.current_page),
        _ => (1, page),
    };

    TransactionsHandle {
        state: (*state).clone(),
        num_pages,
        current_page,
        set_current_page,
        refetch,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::Reducible;

    use super::{PageAction, PageSelection};
    use crate::month::Month;

    fn may() -> Month {
        Month::new(2025, 5).unwrap()
    }

    #[test]
    fn selection_applies_to_its_own_month() {
        let selection = PageSelection::new(may(), 3);

        assert_eq!(selection.page_for(may()), 3);
    }

    #[test]
    fn month_change_resets_to_first_page() {
        let selection = PageSelection::new(may(), 3);

        assert_eq!(selection.page_for(may().previous()), 1);
        assert_eq!(selection.page_for(may().next()), 1);
    }

    #[test]
    fn returning_to_a_month_does_not_restore_its_page() {
        let april = may().previous();
        let selection = Rc::new(PageSelection::new(may(), 3))
            .reduce(PageAction::Show(april))
            .reduce(PageAction::Show(may()));

        assert_eq!(selection.page_for(may()), 1);
    }

    #[test]
    fn showing_the_same_month_keeps_the_selection() {
        let selection = Rc::new(PageSelection::new(may(), 3));
        let shown = selection.clone().reduce(PageAction::Show(may()));

        assert!(Rc::ptr_eq(&selection, &shown));
        assert_eq!(shown.page_for(may()), 3);
    }

    #[test]
    fn selecting_a_page() {
        let selection = Rc::new(PageSelection::new(may(), 1)).reduce(PageAction::Select(may(), 4));

        assert_eq!(selection.page_for(may()), 4);
    }

    #[test]
    fn page_zero_is_clamped() {
        assert_eq!(PageSelection::new(may(), 0).page_for(may()), 1);

        let selected = Rc::new(PageSelection::new(may(), 2)).reduce(PageAction::Select(may(), 0));
        assert_eq!(selected.page_for(may()), 1);
    }
}
