use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    route::{AppContext, Route},
    session::SessionStatus,
};

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    pub children: Children,
}

/// Renders its children only once the server confirms the session.
///
/// The check runs once per mount. A rejected session and a failed request both send the
/// user to the login page.
#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let ctx = use_context::<AppContext>();
    let status = use_state(|| SessionStatus::Unknown);

    {
        let status = status.clone();
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |_| {
                match ctx {
                    Some(ctx) => spawn_local(async move {
                        let result = ctx.client.validate_session().await;
                        if let Err(err) = &result {
                            log::error!("Error validating session: {err}");
                        }
                        status.set(status.resolve(SessionStatus::from_validation(&result)));
                    }),
                    None => {
                        log::error!("AuthGuard rendered without an AppContext");
                        status.set(SessionStatus::Unauthenticated);
                    }
                }
                || ()
            },
            (),
        );
    }

    {
        let navigate = ctx.as_ref().map(|ctx| ctx.navigate.clone());
        use_effect_with_deps(
            move |status| {
                if *status == SessionStatus::Unauthenticated {
                    if let Some(navigate) = navigate {
                        navigate.emit(Route::Login);
                    }
                }
                || ()
            },
            *status,
        );
    }

    match *status {
        SessionStatus::Unknown => html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Loading..."}
            </div>
        },
        SessionStatus::Authenticated => html! { <>{ for props.children.iter() }</> },
        SessionStatus::Unauthenticated => html! {},
    }
}
