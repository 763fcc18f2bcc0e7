use yew::prelude::*;

use crate::{components::comparison_chart::ComparisonChartView, config::CURRENCY_NAME};

#[derive(Properties, PartialEq)]
pub struct BudgetComparisonProps {
    pub monthly_budget: f64,
    pub actual_expense: f64,
    pub total_income: f64,
}

#[function_component(BudgetComparison)]
pub fn budget_comparison(props: &BudgetComparisonProps) -> Html {
    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <h2 class="font-bold text-foreground text-lg mb-4">{"Budget Management"}</h2>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ComparisonChartView
                    left_label="Monthly Budget"
                    left_value={props.monthly_budget}
                    right_label="Actual Expense"
                    right_value={props.actual_expense}
                    title="Budget vs. Actual Expense Comparison"
                    subtitle={CURRENCY_NAME}
                />
                <ComparisonChartView
                    left_label="Total Income"
                    left_value={props.total_income}
                    right_label="Actual Expense"
                    right_value={props.actual_expense}
                    title="Income vs. Expense Comparison"
                    subtitle={CURRENCY_NAME}
                />
            </div>
        </div>
    }
}
