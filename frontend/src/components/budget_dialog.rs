use yew::prelude::*;

use crate::components::input_value;

#[derive(Properties, PartialEq)]
pub struct BudgetDialogProps {
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub saving: bool,
    pub on_submit: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(BudgetDialog)]
pub fn budget_dialog(props: &BudgetDialogProps) -> Html {
    let amount = use_state(String::new);

    let on_submit = {
        let amount = amount.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*amount).clone());
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40">
            <form class="w-full max-w-sm bg-card border border-border rounded-2xl shadow-lg p-6 space-y-4" onsubmit={on_submit}>
                <h3 class="text-lg font-bold text-foreground">{"Add Monthly Budget"}</h3>
                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Budget Amount"}</label>
                    <input
                        type="number"
                        step="any"
                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground"
                        value={(*amount).clone()}
                        oninput={{
                            let amount = amount.clone();
                            Callback::from(move |e: InputEvent| amount.set(input_value(e)))
                        }}
                    />
                </div>

                if let Some(msg) = &props.error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }

                <div class="flex justify-end gap-3 pt-2">
                    <button type="button" class="px-4 py-2 rounded-xl text-sm font-medium text-muted-foreground hover:bg-secondary" onclick={on_close}>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="px-4 py-2 rounded-xl text-sm font-bold bg-primary text-primary-foreground hover:opacity-90" disabled={props.saving}>
                        { if props.saving { "Saving..." } else { "Submit" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
