use yew::prelude::*;

use crate::{
    chart::{ComparisonChart, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_TOP},
    config::{CHART_HEIGHT, CHART_WIDTH},
};

#[derive(Properties, PartialEq)]
pub struct ComparisonChartProps {
    pub left_label: AttrValue,
    pub left_value: f64,
    pub right_label: AttrValue,
    pub right_value: f64,
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

fn px(value: f64) -> String {
    format!("{value:.2}")
}

#[function_component(ComparisonChartView)]
pub fn comparison_chart_view(props: &ComparisonChartProps) -> Html {
    let chart = ComparisonChart::new(
        props.left_label.to_string(),
        props.left_value,
        props.right_label.to_string(),
        props.right_value,
        CHART_WIDTH,
        CHART_HEIGHT,
    );
    let layout = chart.layout();
    let (width, height) = (chart.width, chart.height);
    let annotation = &layout.annotation;

    html! {
        <svg
            class="w-full"
            width={px(width)}
            height={px(height)}
            viewBox={format!("0 0 {width} {height}")}
            style="max-width: 100%; height: auto; font-family: Arial, sans-serif;"
        >
            <rect width={px(width)} height={px(height)} fill="#f9f9f9" rx="8" ry="8" />

            <text x={px(width / 2.0)} y={px(MARGIN_TOP / 2.0)} text-anchor="middle" font-size="20px" font-weight="bold" fill="#333">
                { props.title.to_string() }
            </text>
            <text x={px(width / 2.0)} y={px(MARGIN_TOP / 2.0 + 25.0)} text-anchor="middle" font-size="14px" font-style="italic" fill="#555">
                { props.subtitle.to_string() }
            </text>

            <g transform={format!("translate({MARGIN_LEFT}, {MARGIN_TOP})")}>
                // horizontal gridlines and y-axis labels
                { for layout.ticks.iter().map(|tick| html! {
                    <g>
                        <line x1="0" x2={px(layout.inner_width)} y1={px(tick.y)} y2={px(tick.y)} stroke="#888" stroke-opacity="0.1" />
                        <line x1="-6" x2="0" y1={px(tick.y)} y2={px(tick.y)} stroke="#888" stroke-width="1.5" />
                        <text x="-10" y={px(tick.y)} dy="0.32em" text-anchor="end" font-size="12px" font-weight="bold" fill="#333">
                            { tick.label.clone() }
                        </text>
                    </g>
                }) }

                <line x1="0" x2="0" y1="0" y2={px(layout.inner_height)} stroke="#888" stroke-width="1.5" />
                <line x1="0" x2={px(layout.inner_width)} y1={px(layout.inner_height)} y2={px(layout.inner_height)} stroke="#888" stroke-width="1.5" />

                <text
                    transform="rotate(-90)"
                    y={px(-MARGIN_LEFT + 25.0)}
                    x={px(-layout.inner_height / 2.0)}
                    text-anchor="middle"
                    font-size="15px"
                    font-weight="bold"
                    fill="#333"
                >
                    {"Amount"}
                </text>

                { for layout.bars.iter().map(|bar| {
                    let centre = bar.x + bar.width / 2.0;
                    html! {
                        <g>
                            <rect
                                class="bar"
                                x={px(bar.x)}
                                y={px(bar.y)}
                                width={px(bar.width)}
                                height={px(bar.height)}
                                fill={bar.color}
                                rx="6"
                                ry="6"
                                opacity="0.9"
                            />
                            <text x={px(centre)} y={px(bar.y - 15.0)} text-anchor="middle" font-size="14px" font-weight="bold" fill="#333">
                                { bar.value_label.clone() }
                            </text>
                            <text x={px(centre)} y={px(layout.inner_height)} dy="1.6em" text-anchor="middle" font-size="13px" font-weight="bold" fill="#333">
                                { bar.label.clone() }
                            </text>
                        </g>
                    }
                }) }
            </g>

            <rect
                x={px(width / 2.0 - 150.0)}
                y={px(height - MARGIN_BOTTOM / 2.0 - 15.0)}
                width="300"
                height="30"
                rx="15"
                ry="15"
                fill={annotation.fill()}
                stroke={annotation.stroke()}
                stroke-width="1"
            />
            <text
                x={px(width / 2.0)}
                y={px(height - MARGIN_BOTTOM / 2.0 + 5.0)}
                text-anchor="middle"
                font-size="14px"
                font-weight="bold"
                fill={annotation.text_color()}
            >
                { annotation.text.clone() }
            </text>
        </svg>
    }
}
