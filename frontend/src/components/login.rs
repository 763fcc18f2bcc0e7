use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    components::input_value,
    route::{AppContext, Route},
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let ctx = use_context::<AppContext>();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let ctx = ctx.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(ctx) = ctx.clone() else {
                return;
            };
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();

            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match ctx.client.login(&email_val, &password_val).await {
                    Ok(()) => {
                        log::info!("Login successful");
                        loading.set(false);
                        ctx.navigate.emit(Route::Dashboard);
                    }
                    Err(err) => {
                        log::error!("Error logging in: {err}");
                        error.set(Some(err.message()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let go_to_signup = {
        let ctx = ctx.clone();
        Callback::from(move |_| {
            if let Some(ctx) = &ctx {
                ctx.navigate.emit(Route::Signup);
            }
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{"Login"}</h1>
                    <p class="text-sm text-muted-foreground mt-2">{"Sign in to continue."}</p>
                </div>

                if let Some(msg) = &*error {
                    <div class="mb-4 text-sm text-red-500">{ msg.clone() }</div>
                }

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Email"}</label>
                        <input
                            type="email"
                            required={true}
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| email.set(input_value(e)))
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Password"}</label>
                        <input
                            type="password"
                            required={true}
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| password.set(input_value(e)))
                            }}
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else { "Login" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    {"No account?"}
                    <button type="button" class="ml-2 text-primary font-semibold" onclick={go_to_signup}>
                        {"Go to SignUp"}
                    </button>
                </div>
            </div>
        </div>
    }
}
