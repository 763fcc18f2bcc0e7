use yew::prelude::*;

use crate::{
    components::{
        budget_comparison::BudgetComparison, navbar::Navbar, summary_panel::SummaryPanel,
        transactions_table::TransactionsTable,
    },
    hooks::{use_summary::use_summary, use_transactions::use_transactions},
    month::Month,
    mutations::Refetch,
    route::AppContext,
};

/// Summary, transactions and charts for one month. The month is the only state shared
/// between the panels; each data hook reloads itself when it changes.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let client = use_context::<AppContext>()
        .map(|ctx| ctx.client)
        .unwrap_or_default();
    let month = use_state(Month::current);

    let transactions = use_transactions(&client, *month);
    let summary = use_summary(&client, *month);

    let refetch = Refetch {
        transactions: transactions.refetch.clone(),
        summary: summary.refetch.clone(),
    };

    let on_month_change = {
        let month = month.clone();
        Callback::from(move |next: Month| month.set(next))
    };

    let (monthly_budget, actual_expense, total_income) = summary
        .summary()
        .map(|s| (s.monthly_budget(), s.total_expense(), s.total_income()))
        .unwrap_or_default();

    html! {
        <div class="min-h-screen bg-background">
            <Navbar title="Dashboard" />
            <main class="max-w-6xl mx-auto p-6 space-y-6">
                <SummaryPanel
                    month={*month}
                    {on_month_change}
                    summary={summary.state.clone()}
                    refetch={refetch.clone()}
                />
                <TransactionsTable
                    state={transactions.state.clone()}
                    num_pages={transactions.num_pages}
                    current_page={transactions.current_page}
                    on_page={transactions.set_current_page.clone()}
                    {refetch}
                />
                <BudgetComparison {monthly_budget} {actual_expense} {total_income} />
            </main>
        </div>
    }
}
