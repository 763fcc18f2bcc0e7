use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    components::input_value,
    route::{AppContext, Route},
};

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let ctx = use_context::<AppContext>();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let ctx = ctx.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(ctx) = ctx.clone() else {
                return;
            };
            let name_val = name.trim().to_string();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();

            if name_val.is_empty() || email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Name, email and password are required".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let result = ctx.client.signup(&name_val, &email_val, &password_val).await;
                loading.set(false);
                match result {
                    Ok(()) => {
                        log::info!("Signup successful");
                        ctx.navigate.emit(Route::Login);
                    }
                    Err(err) => {
                        log::error!("Error signing up: {err}");
                        let message = match err {
                            crate::error::ApiError::Status {
                                detail: Some(detail),
                                ..
                            } => detail,
                            _ => "Signup failed".to_string(),
                        };
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let go_to_login = {
        let ctx = ctx.clone();
        Callback::from(move |_| {
            if let Some(ctx) = &ctx {
                ctx.navigate.emit(Route::Login);
            }
        })
    };

    let text_input = |kind: &'static str, label: &'static str, handle: UseStateHandle<String>| {
        let oninput = {
            let handle = handle.clone();
            Callback::from(move |e: InputEvent| handle.set(input_value(e)))
        };
        html! {
            <div class="space-y-1">
                <label class="text-sm font-medium text-foreground">{ label }</label>
                <input
                    type={kind}
                    required={true}
                    class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                    value={(*handle).clone()}
                    {oninput}
                />
            </div>
        }
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{"Create account"}</h1>
                    <p class="text-sm text-muted-foreground mt-2">{"Start tracking your expenses."}</p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    { text_input("text", "Name", name.clone()) }
                    { text_input("email", "Email", email.clone()) }
                    { text_input("password", "Password", password.clone()) }

                    if let Some(msg) = &*error {
                        <p class="text-sm text-red-500">{ msg.clone() }</p>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else { "Signup" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    {"Already have an account?"}
                    <button type="button" class="ml-2 text-primary font-semibold" onclick={go_to_login}>
                        {"Go to Login"}
                    </button>
                </div>
            </div>
        </div>
    }
}
