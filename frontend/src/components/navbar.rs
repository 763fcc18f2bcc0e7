use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    components::icons::{icon_log_out, icon_wallet},
    route::{AppContext, Route},
};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let ctx = use_context::<AppContext>();

    // The user ends up on the login page whether or not the server call succeeds.
    let on_logout = Callback::from(move |_| {
        let Some(ctx) = ctx.clone() else {
            return;
        };
        spawn_local(async move {
            match ctx.client.logout().await {
                Ok(()) => log::info!("Successfully logged out"),
                Err(err) => log::error!("Logout failed: {err}"),
            }
            ctx.navigate.emit(Route::Login);
        });
    });

    html! {
        <nav class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 bg-[#173E63] text-white rounded-full flex items-center justify-center">
                    { icon_wallet() }
                </div>
                <span class="text-[#173E63] text-2xl font-black tracking-tight">{ props.title.to_string() }</span>
            </div>
            <button onclick={on_logout} aria-label="Log out" class="flex items-center gap-2 px-4 py-2 rounded-xl hover:bg-white/50 transition-colors text-[13px] font-medium text-[#173E63]">
                { icon_log_out() }
                <span>{"Log Out"}</span>
            </button>
        </nav>
    }
}
