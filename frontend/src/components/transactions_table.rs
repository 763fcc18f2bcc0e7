use yew::prelude::*;

use crate::{
    components::{
        icons::{icon_calendar, icon_edit, icon_filter, icon_money, icon_trash},
        input_value,
        pagination::Pagination,
        select_value,
        transaction_dialog::TransactionDialog,
    },
    config::CURRENCY_SYMBOL,
    filters::{TransactionFilter, CATEGORY_OPTIONS},
    format::{format_amount, format_date},
    forms::TransactionForm,
    hooks::FetchState,
    models::{Transaction, TransactionPage},
    mutations::{self, Invalidates, Refetch},
    route::AppContext,
};

#[derive(Properties, PartialEq)]
pub struct TransactionsTableProps {
    pub state: FetchState<TransactionPage>,
    pub num_pages: u32,
    pub current_page: u32,
    pub on_page: Callback<u32>,
    pub refetch: Refetch,
}

#[function_component(TransactionsTable)]
pub fn transactions_table(props: &TransactionsTableProps) -> Html {
    let ctx = use_context::<AppContext>();
    let filter = use_state(TransactionFilter::default);
    let show_filters = use_state(|| true);
    let editing = use_state(|| None::<Transaction>);
    let edit_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let set_filter = |apply: fn(&mut TransactionFilter, String)| {
        let filter = filter.clone();
        move |value: String| {
            let mut next = (*filter).clone();
            apply(&mut next, value);
            filter.set(next);
        }
    };
    let on_date = {
        let set = set_filter(|f, v| f.date = v);
        Callback::from(move |e: InputEvent| set(input_value(e)))
    };
    let on_category = {
        let set = set_filter(|f, v| f.category = v);
        Callback::from(move |e: Event| set(select_value(e)))
    };
    let on_min_amount = {
        let set = set_filter(|f, v| f.min_amount = v);
        Callback::from(move |e: InputEvent| set(input_value(e)))
    };
    let on_reset = {
        let filter = filter.clone();
        Callback::from(move |_| filter.set(TransactionFilter::default()))
    };
    let on_toggle_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_| show_filters.set(!*show_filters))
    };

    let on_delete = {
        let ctx = ctx.clone();
        let refetch = props.refetch.clone();
        Callback::from(move |transaction_id: String| {
            let Some(ctx) = ctx.clone() else {
                return;
            };
            mutations::run(
                "delete transaction",
                async move { ctx.client.delete_transaction(&transaction_id).await },
                Invalidates::Everything,
                refetch.clone(),
                Callback::noop(),
                Callback::noop(),
            );
        })
    };

    let on_close_edit = {
        let editing = editing.clone();
        let edit_error = edit_error.clone();
        Callback::from(move |_| {
            edit_error.set(None);
            editing.set(None);
        })
    };

    let on_save_edit = {
        let ctx = ctx.clone();
        let editing = editing.clone();
        let edit_error = edit_error.clone();
        let saving = saving.clone();
        let refetch = props.refetch.clone();
        let on_close_edit = on_close_edit.clone();
        Callback::from(move |form: TransactionForm| {
            let (Some(ctx), Some(original)) = (ctx.clone(), (*editing).clone()) else {
                return;
            };
            let updated = match form.apply_to(&original) {
                Ok(updated) => updated,
                Err(err) => {
                    edit_error.set(Some(err.to_string()));
                    return;
                }
            };
            saving.set(true);
            let saving = saving.clone();
            mutations::run(
                "edit transaction",
                async move { ctx.client.edit_transaction(&updated).await },
                Invalidates::Everything,
                refetch.clone(),
                on_close_edit.clone(),
                Callback::from(move |_| saving.set(false)),
            );
        })
    };

    let content = match &props.state {
        FetchState::Loading => html! {
            <div class="py-10 text-center text-muted-foreground">
                <div class="mx-auto mb-3 w-8 h-8 rounded-full border-4 border-secondary border-t-primary animate-spin"></div>
                <p>{"Loading Transactions..."}</p>
            </div>
        },
        FetchState::Error(message) => html! {
            <p class="py-6 text-center text-sm text-red-600">{ message.clone() }</p>
        },
        FetchState::Ready(page) if page.transactions.is_empty() => html! {
            <p class="py-6 text-center text-muted-foreground">{"Add transactions to track your budget."}</p>
        },
        FetchState::Ready(page) => {
            let visible = filter.apply(&page.transactions);
            let filter_input_class = "w-full px-3 py-2 bg-input border border-input rounded-lg text-sm text-foreground";

            html! {
                <>
                    <div class="rounded-lg border border-border p-4 mb-4">
                        <div class="flex items-center justify-between">
                            <h3 class="flex items-center gap-2 text-sm font-bold text-foreground">
                                { icon_filter() }
                                {"Filter Transactions"}
                            </h3>
                            <button type="button" class="text-xs font-semibold text-primary" onclick={on_toggle_filters}>
                                { if *show_filters { "Hide Filters" } else { "Show Filters" } }
                            </button>
                        </div>

                        if *show_filters {
                            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mt-4 items-end">
                                <div class="space-y-1">
                                    <label for="date-filter" class="flex items-center gap-1 text-xs font-medium text-muted-foreground">
                                        { icon_calendar() }
                                        {"Date"}
                                    </label>
                                    <input id="date-filter" type="date" class={filter_input_class} value={filter.date.clone()} oninput={on_date} />
                                </div>
                                <div class="space-y-1">
                                    <label for="category-filter" class="text-xs font-medium text-muted-foreground">{"Category"}</label>
                                    <select id="category-filter" class={filter_input_class} onchange={on_category}>
                                        <option value="" selected={filter.category.is_empty()}>{"All Categories"}</option>
                                        { for CATEGORY_OPTIONS.iter().map(|option| html! {
                                            <option value={*option} selected={filter.category == *option}>{ *option }</option>
                                        }) }
                                    </select>
                                </div>
                                <div class="space-y-1">
                                    <label for="amount-filter" class="flex items-center gap-1 text-xs font-medium text-muted-foreground">
                                        { icon_money() }
                                        { format!("Min Amount ({CURRENCY_SYMBOL})") }
                                    </label>
                                    <input id="amount-filter" type="number" placeholder="0" class={filter_input_class} value={filter.min_amount.clone()} oninput={on_min_amount} />
                                </div>
                                <div>
                                    <button type="button" class="w-full px-4 py-2 rounded-lg text-sm font-semibold bg-secondary text-secondary-foreground hover:opacity-80 disabled:opacity-50" disabled={filter.is_empty()} onclick={on_reset}>
                                        {"Reset Filters"}
                                    </button>
                                </div>
                            </div>
                        }

                        <p class="mt-3 text-xs text-muted-foreground">
                            { format!("Showing {} of {} transactions", visible.len(), page.transactions.len()) }
                        </p>
                    </div>

                    <div class="overflow-x-auto">
                        <table class="w-full text-left border-collapse">
                            <thead class="bg-secondary border-b border-border">
                                <tr>
                                    <th class="px-6 py-3 text-sm font-semibold text-secondary-foreground">{"Date"}</th>
                                    <th class="px-6 py-3 text-sm font-semibold text-secondary-foreground">{"Type"}</th>
                                    <th class="px-6 py-3 text-sm font-semibold text-secondary-foreground">{"Category"}</th>
                                    <th class="px-6 py-3 text-sm font-semibold text-secondary-foreground">{"Description"}</th>
                                    <th class="px-6 py-3 text-right text-sm font-semibold text-secondary-foreground">{"Amount"}</th>
                                    <th class="px-6 py-3 text-sm font-semibold text-secondary-foreground">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { for visible.into_iter().map(|tx| {
                                    let date = tx
                                        .created_date()
                                        .map(format_date)
                                        .unwrap_or_else(|| tx.created_at.clone());
                                    let on_edit = {
                                        let editing = editing.clone();
                                        let tx = tx.clone();
                                        Callback::from(move |_| editing.set(Some(tx.clone())))
                                    };
                                    let on_delete = {
                                        let on_delete = on_delete.clone();
                                        let id = tx.transaction_id.clone();
                                        Callback::from(move |_| on_delete.emit(id.clone()))
                                    };
                                    html! {
                                        <tr key={tx.transaction_id.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                            <td class="px-6 py-3 text-muted-foreground">{ date }</td>
                                            <td class="px-6 py-3 text-foreground">{ tx.transaction_type.clone() }</td>
                                            <td class="px-6 py-3 text-foreground">{ tx.transaction_category.clone() }</td>
                                            <td class="px-6 py-3 text-foreground">{ tx.description.clone() }</td>
                                            <td class="px-6 py-3 text-right font-semibold text-foreground">
                                                { format!("{} {}", CURRENCY_SYMBOL, format_amount(tx.amount_value())) }
                                            </td>
                                            <td class="px-6 py-3">
                                                <div class="flex gap-2">
                                                    <button type="button" class="flex items-center gap-1 text-primary" onclick={on_edit}>
                                                        { icon_edit() }{"Edit"}
                                                    </button>
                                                    <button type="button" class="flex items-center gap-1 text-red-600" onclick={on_delete}>
                                                        { icon_trash() }{"Delete"}
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    </div>

                    <Pagination
                        num_pages={props.num_pages}
                        current_page={props.current_page}
                        on_select={props.on_page.clone()}
                    />
                </>
            }
        }
    };

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <h2 class="font-bold text-foreground text-lg mb-4">{"Transaction Overview"}</h2>
            { content }

            if let Some(tx) = &*editing {
                <TransactionDialog
                    key={tx.transaction_id.clone()}
                    title="Edit Transaction"
                    submit_label="Save"
                    initial={TransactionForm::from_transaction(tx)}
                    error={(*edit_error).clone()}
                    saving={*saving}
                    on_submit={on_save_edit}
                    on_close={on_close_edit}
                />
            }
        </div>
    }
}
