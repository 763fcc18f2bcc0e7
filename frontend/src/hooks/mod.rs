use std::{cell::Cell, rc::Rc};

use yew::Reducible;

pub mod use_summary;
pub mod use_transactions;

/// Where a single data source stands.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// How many times a data source has been asked to reload.
///
/// Held in a reducer so every dispatched [`Reload`] counts against the latest value, even
/// when several come from callbacks created in the same render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReloadCounter(u32);

pub struct Reload;

impl ReloadCounter {
    pub fn count(&self) -> u32 {
        self.0
    }
}

impl Reducible for ReloadCounter {
    type Action = Reload;

    fn reduce(self: Rc<Self>, _: Reload) -> Rc<Self> {
        Rc::new(ReloadCounter(self.0.wrapping_add(1)))
    }
}

/// Shared between an effect and the request it started. Once the effect is torn down the
/// request is superseded and its response must not reach the state.
#[derive(Clone, Debug, Default)]
pub struct RequestGuard(Rc<Cell<bool>>);

impl RequestGuard {
    pub fn supersede(&self) {
        self.0.set(true);
    }

    /// `None` when a newer request has taken over.
    pub fn accept<T>(&self, result: T) -> Option<T> {
        if self.0.get() {
            None
        } else {
            Some(result)
        }
    }
}

impl<T> From<Result<T, crate::error::ApiError>> for FetchState<T> {
    fn from(result: Result<T, crate::error::ApiError>) -> Self {
        match result {
            Ok(data) => FetchState::Ready(data),
            Err(err) => FetchState::Error(err.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::Reducible;

    use super::{FetchState, Reload, ReloadCounter, RequestGuard};
    use crate::error::ApiError;

    #[test]
    fn overlapping_reloads_both_count() {
        let start = Rc::new(ReloadCounter::default());

        let once = start.clone().reduce(Reload);
        let twice = once.clone().reduce(Reload);

        assert_eq!(once.count(), 1);
        assert_eq!(twice.count(), 2);
        assert_ne!(*once, *twice);
    }

    #[test]
    fn reload_counter_wraps() {
        let last = Rc::new(ReloadCounter(u32::MAX));
        assert_eq!(last.reduce(Reload).count(), 0);
    }

    #[test]
    fn current_request_is_accepted() {
        let guard = RequestGuard::default();
        assert_eq!(guard.accept(Ok::<_, ApiError>(7)), Some(Ok(7)));
    }

    #[test]
    fn superseded_request_is_dropped() {
        let guard = RequestGuard::default();
        let in_flight = guard.clone();

        guard.supersede();

        assert_eq!(in_flight.accept(Ok::<_, ApiError>(7)), None);
        assert_eq!(
            in_flight.accept(Err::<u32, _>(ApiError::Network("offline".to_string()))),
            None
        );
    }

    #[test]
    fn each_request_has_its_own_guard() {
        let stale = RequestGuard::default();
        let fresh = RequestGuard::default();

        stale.supersede();

        assert_eq!(stale.accept(1), None);
        assert_eq!(fresh.accept(2), Some(2));
    }

    #[test]
    fn accessors_match_variant() {
        let loading: FetchState<u32> = FetchState::Loading;
        assert_eq!(loading.data(), None);

        let ready = FetchState::Ready(3);
        assert_eq!(ready.data(), Some(&3));

        let failed: FetchState<u32> = FetchState::Error("boom".to_string());
        assert_eq!(failed.data(), None);
    }

    #[test]
    fn from_result_keeps_server_detail() {
        let state: FetchState<u32> = Err(ApiError::Status {
            status: 404,
            detail: Some("No summary for this month".to_string()),
        })
        .into();

        assert_eq!(state, FetchState::Error("No summary for this month".to_string()));
        assert_eq!(FetchState::from(Ok::<_, ApiError>(5)), FetchState::Ready(5));
    }
}
