use yew::prelude::*;

use crate::{
    components::{
        budget_dialog::BudgetDialog,
        icons::{icon_chevron_left, icon_chevron_right, icon_plus},
        transaction_dialog::TransactionDialog,
    },
    format::format_amount,
    forms::{budget_update, TransactionForm},
    hooks::FetchState,
    models::MonthlySummary,
    month::Month,
    mutations::{self, Invalidates, Refetch},
    route::AppContext,
};

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub month: Month,
    pub on_month_change: Callback<Month>,
    pub summary: FetchState<Option<MonthlySummary>>,
    pub refetch: Refetch,
}

#[derive(Clone, Copy, PartialEq)]
enum Dialog {
    Closed,
    Budget,
    Transaction,
}

#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let ctx = use_context::<AppContext>();
    let dialog = use_state(|| Dialog::Closed);
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_previous = {
        let on_month_change = props.on_month_change.clone();
        let month = props.month;
        Callback::from(move |_| on_month_change.emit(month.previous()))
    };
    let on_next = {
        let on_month_change = props.on_month_change.clone();
        let month = props.month;
        Callback::from(move |_| on_month_change.emit(month.next()))
    };

    let open = |which: Dialog| {
        let dialog = dialog.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            form_error.set(None);
            dialog.set(which);
        })
    };
    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(Dialog::Closed))
    };

    let close_on_success = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(Dialog::Closed))
    };
    let on_settled = {
        let saving = saving.clone();
        Callback::from(move |_| saving.set(false))
    };

    let on_submit_budget = {
        let ctx = ctx.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let refetch = props.refetch.clone();
        let close_on_success = close_on_success.clone();
        let on_settled = on_settled.clone();
        let month = props.month;
        Callback::from(move |amount: String| {
            let Some(ctx) = ctx.clone() else {
                return;
            };
            let update = match budget_update(&amount, month) {
                Ok(update) => update,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            form_error.set(None);
            saving.set(true);
            mutations::run(
                "add budget",
                async move { ctx.client.set_monthly_budget(&update).await },
                Invalidates::Summary,
                refetch.clone(),
                close_on_success.clone(),
                on_settled.clone(),
            );
        })
    };

    let on_submit_transaction = {
        let ctx = ctx.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let refetch = props.refetch.clone();
        let month = props.month;
        Callback::from(move |form: TransactionForm| {
            let Some(ctx) = ctx.clone() else {
                return;
            };
            let new = match form.to_new_transaction(month) {
                Ok(new) => new,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            form_error.set(None);
            saving.set(true);
            mutations::run(
                "add transaction",
                async move { ctx.client.add_transaction(&new).await },
                Invalidates::Everything,
                refetch.clone(),
                close_on_success.clone(),
                on_settled.clone(),
            );
        })
    };

    let nav_button = |label: &'static str, icon: Html, onclick: Callback<MouseEvent>| {
        html! {
            <button type="button" aria-label={label} class="p-3 rounded-full bg-secondary hover:opacity-80 transition-opacity" {onclick}>
                { icon }
            </button>
        }
    };

    let body = match &props.summary {
        FetchState::Loading => html! {
            <div class="flex-1 grid grid-cols-2 md:grid-cols-5 gap-4 animate-pulse">
                <div class="h-8 bg-secondary rounded"></div>
                <div class="h-6 bg-secondary rounded w-3/5"></div>
                <div class="h-6 bg-secondary rounded w-3/5"></div>
                <div class="h-6 bg-secondary rounded w-3/5"></div>
                <div class="h-6 bg-secondary rounded w-3/5"></div>
            </div>
        },
        FetchState::Error(message) => html! {
            <p class="flex-1 text-sm text-red-600">{ message.clone() }</p>
        },
        FetchState::Ready(None) => html! {
            <p class="flex-1 text-sm text-muted-foreground">{"No data available"}</p>
        },
        FetchState::Ready(Some(summary)) => html! {
            <div class="flex-1 grid grid-cols-2 md:grid-cols-5 gap-4 items-center">
                <div class="text-lg font-bold text-[#173E63]">{ props.month.display_name() }</div>
                <div class="text-sm text-foreground">{ format!("Income: {}", format_amount(summary.total_income())) }</div>
                <div class="text-sm text-foreground">{ format!("Balance: {}", format_amount(summary.balance())) }</div>
                <div class="text-sm text-foreground">{ format!("Expenses: {}", format_amount(summary.total_expense())) }</div>
                <div class="text-sm text-foreground">{ format!("Monthly Budget: {}", format_amount(summary.monthly_budget())) }</div>
            </div>
        },
    };

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <div class="flex items-center gap-4">
                { nav_button("Previous month", icon_chevron_left(), on_previous) }
                { body }
                { nav_button("Next month", icon_chevron_right(), on_next) }
            </div>

            if matches!(props.summary, FetchState::Ready(Some(_))) {
                <div class="flex justify-end gap-3 mt-4">
                    <button onclick={open(Dialog::Budget)} class="flex items-center gap-2 bg-secondary text-secondary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                        {"Add Monthly Budget"}
                    </button>
                    <button onclick={open(Dialog::Transaction)} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                        { icon_plus() }
                        {"Add Transaction"}
                    </button>
                </div>
            }

            {
                match *dialog {
                    Dialog::Closed => html! {},
                    Dialog::Budget => html! {
                        <BudgetDialog
                            error={(*form_error).clone()}
                            saving={*saving}
                            on_submit={on_submit_budget}
                            on_close={on_close}
                        />
                    },
                    Dialog::Transaction => html! {
                        <TransactionDialog
                            title="Add Transaction"
                            submit_label="Submit"
                            initial={TransactionForm::default()}
                            error={(*form_error).clone()}
                            saving={*saving}
                            on_submit={on_submit_transaction}
                            on_close={on_close}
                        />
                    },
                }
            }
        </div>
    }
}
