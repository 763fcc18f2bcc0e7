use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Window;
use yew::Callback;

use crate::api::ApiClient;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            _ => Route::Dashboard,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/",
        }
    }

    /// The route matching the address bar, or the dashboard outside a browser.
    pub fn current() -> Self {
        Self::from_location(web_sys::window().and_then(|window| window.location().pathname().ok()))
    }

    fn from_location(path: Option<String>) -> Self {
        path.map_or(Route::Dashboard, |path| Route::from_path(&path))
    }

    /// Records the route in the browser history without reloading the page.
    pub fn push_history(self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pushed = window.history().and_then(|history| {
            history.push_state_with_url(&JsValue::NULL, "", Some(self.path()))
        });
        if let Err(err) = pushed {
            log::warn!("Could not update the address bar: {err:?}");
        }
    }
}

/// Follows the browser's back and forward buttons. Detaches itself when dropped.
pub struct HistoryListener {
    window: Window,
    on_pop: Closure<dyn FnMut()>,
}

impl HistoryListener {
    pub fn attach(on_change: Callback<Route>) -> Option<Self> {
        let window = web_sys::window()?;
        let on_pop = Closure::<dyn FnMut()>::new(move || {
            let route = Route::current();
            log::debug!("History moved to {}", route.path());
            on_change.emit(route);
        });
        if let Err(err) =
            window.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())
        {
            log::warn!("Could not follow browser history: {err:?}");
            return None;
        }
        Some(Self { window, on_pop })
    }
}

impl Drop for HistoryListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("popstate", self.on_pop.as_ref().unchecked_ref());
    }
}

/// Shared by every page: how to reach the API and how to move between routes.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub client: ApiClient,
    pub navigate: Callback<Route>,
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn known_paths() {
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/login/"), Route::Login);
        assert_eq!(Route::from_path("/signup"), Route::Signup);
        assert_eq!(Route::from_path("/"), Route::Dashboard);
    }

    #[test]
    fn unknown_paths_go_to_dashboard() {
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
    }

    #[test]
    fn location_without_a_path_is_the_dashboard() {
        assert_eq!(Route::from_location(None), Route::Dashboard);
        assert_eq!(Route::from_location(Some("/signup".to_string())), Route::Signup);
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Login, Route::Signup, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
