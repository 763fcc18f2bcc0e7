use yew::prelude::*;

mod api;
mod chart;
mod components;
mod config;
mod error;
mod filters;
mod format;
mod forms;
mod hooks;
mod models;
mod month;
mod mutations;
mod route;
mod session;

use api::ApiClient;
use components::{
    auth_guard::AuthGuard, dashboard::DashboardPage, login::LoginPage, signup::SignupPage,
};
use route::{AppContext, HistoryListener, Route};

#[function_component(App)]
fn app() -> Html {
    let route = use_state(Route::current);

    let navigate = use_callback(
        |next: Route, set_route: &UseStateSetter<Route>| {
            log::debug!("Navigating to {}", next.path());
            next.push_history();
            set_route.set(next);
        },
        route.setter(),
    );

    {
        let set_route = route.setter();
        use_effect_with_deps(
            move |_| {
                let on_change = Callback::from(move |next| set_route.set(next));
                let listener = HistoryListener::attach(on_change);
                move || drop(listener)
            },
            (),
        );
    }

    let context = use_memo(
        |navigate| AppContext {
            client: ApiClient::default(),
            navigate: navigate.clone(),
        },
        navigate,
    );

    let content = match *route {
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Dashboard => html! {
            <AuthGuard>
                <DashboardPage />
            </AuthGuard>
        },
    };

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            { content }
        </ContextProvider<AppContext>>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    yew::Renderer::<App>::new().render();
}
