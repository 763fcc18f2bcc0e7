use yew::prelude::*;

use crate::{
    components::{input_value, select_value},
    forms::{TransactionForm, TRANSACTION_TYPES},
};

#[derive(Properties, PartialEq)]
pub struct TransactionDialogProps {
    pub title: AttrValue,
    pub submit_label: AttrValue,
    pub initial: TransactionForm,
    /// Inline message from the last submit attempt, e.g. a missing field.
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub saving: bool,
    pub on_submit: Callback<TransactionForm>,
    pub on_close: Callback<()>,
}

/// Modal used both to add a transaction and to edit one.
#[function_component(TransactionDialog)]
pub fn transaction_dialog(props: &TransactionDialogProps) -> Html {
    let form = use_state(|| props.initial.clone());

    let update = |apply: fn(&mut TransactionForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_type = {
        let set = update(|f, v| f.transaction_type = v);
        Callback::from(move |e: Event| set(select_value(e)))
    };
    let on_amount = {
        let set = update(|f, v| f.amount = v);
        Callback::from(move |e: InputEvent| set(input_value(e)))
    };
    let on_description = {
        let set = update(|f, v| f.description = v);
        Callback::from(move |e: InputEvent| set(input_value(e)))
    };

    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*form).clone());
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40">
            <form class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-6 space-y-4" onsubmit={on_submit}>
                <h3 class="text-lg font-bold text-foreground">{ props.title.to_string() }</h3>

                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Transaction Type"}</label>
                    <select class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground" onchange={on_type}>
                        <option value="" selected={form.transaction_type.is_empty()}>{"Select a type"}</option>
                        { for TRANSACTION_TYPES.iter().map(|kind| html! {
                            <option value={*kind} selected={form.transaction_type == *kind}>{ *kind }</option>
                        }) }
                    </select>
                </div>

                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Amount"}</label>
                    <input
                        type="number"
                        step="any"
                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground"
                        value={form.amount.clone()}
                        oninput={on_amount}
                    />
                </div>

                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Description"}</label>
                    <input
                        type="text"
                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground"
                        value={form.description.clone()}
                        oninput={on_description}
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
                        { if props.saving { "Saving...".to_string() } else { props.submit_label.to_string() } }
                    </button>
                </div>
            </form>
        </div>
    }
}
