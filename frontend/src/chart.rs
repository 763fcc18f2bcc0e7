//! Geometry and wording for the two-bar comparison charts.
//!
//! Everything here is plain arithmetic over the two values so the SVG component only has
//! to place what [`ComparisonChart::layout`] computed.

use crate::format::format_currency;

pub const MARGIN_TOP: f64 = 60.0;
pub const MARGIN_RIGHT: f64 = 60.0;
pub const MARGIN_BOTTOM: f64 = 80.0;
pub const MARGIN_LEFT: f64 = 90.0;

const HEADROOM: f64 = 1.2;
const BAND_PADDING: f64 = 0.3;
const TARGET_TICKS: f64 = 8.0;

pub const LEFT_BAR_COLOR: &str = "#4CAF50";
pub const WARNING_BAR_COLOR: &str = "#f44336";
pub const NEUTRAL_BAR_COLOR: &str = "#2196F3";
pub const WARNING_TEXT_COLOR: &str = "#d32f2f";
pub const INFO_TEXT_COLOR: &str = "#0277bd";

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonChart {
    pub left_label: String,
    pub left_value: f64,
    pub right_label: String,
    pub right_value: f64,
    pub width: f64,
    pub height: f64,
}

/// What the annotation under the chart compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Budget,
    Income,
    Other,
}

impl Baseline {
    fn detect(left_label: &str, right_label: &str) -> Self {
        let left = left_label.to_lowercase();
        let right = right_label.to_lowercase();
        if left.contains("budget") && right.contains("expense") {
            Baseline::Budget
        } else if left.contains("income") && right.contains("expense") {
            Baseline::Income
        } else {
            Baseline::Other
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value_label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub warning: bool,
}

impl Annotation {
    pub fn text_color(&self) -> &'static str {
        if self.warning {
            WARNING_TEXT_COLOR
        } else {
            INFO_TEXT_COLOR
        }
    }

    pub fn fill(&self) -> &'static str {
        if self.warning {
            "#ffecec"
        } else {
            "#e6f7ff"
        }
    }

    pub fn stroke(&self) -> &'static str {
        if self.warning {
            "#ffcdd2"
        } else {
            "#b3e5fc"
        }
    }
}

/// Positions in the inner plot area (origin at the top-left of the plot, after margins).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub inner_width: f64,
    pub inner_height: f64,
    pub domain_max: f64,
    pub bars: [Bar; 2],
    pub ticks: Vec<Tick>,
    pub annotation: Annotation,
}

impl ComparisonChart {
    pub fn new(
        left_label: impl Into<String>,
        left_value: f64,
        right_label: impl Into<String>,
        right_value: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            left_label: left_label.into(),
            left_value: sanitize(left_value),
            right_label: right_label.into(),
            right_value: sanitize(right_value),
            width,
            height,
        }
    }

    pub fn baseline(&self) -> Baseline {
        Baseline::detect(&self.left_label, &self.right_label)
    }

    /// `(right - left) / left * 100`, or `None` when `left` is zero.
    pub fn percent_diff(&self) -> Option<f64> {
        if self.left_value == 0.0 {
            return None;
        }
        Some((self.right_value - self.left_value) / self.left_value * 100.0)
    }

    pub fn is_warning(&self) -> bool {
        self.right_value > self.left_value
    }

    pub fn annotation(&self) -> Annotation {
        let (left, right) = (self.left_value, self.right_value);
        let warning = self.is_warning();

        if left == right {
            let text = match self.baseline() {
                Baseline::Budget => "Actual expense matches budget exactly".to_string(),
                Baseline::Income => "Expenses equal income".to_string(),
                Baseline::Other => format!("{} equals {}", self.right_label, self.left_label),
            };
            return Annotation { text, warning };
        }

        let Some(diff) = self.percent_diff() else {
            return Annotation {
                text: format!("{} vs. {}: N/A", self.right_label, self.left_label),
                warning,
            };
        };
        let pct = format!("{:.1}", diff.abs());

        let text = match (self.baseline(), warning) {
            (Baseline::Budget, true) => format!("Actual is {pct}% over budget"),
            (Baseline::Budget, false) => format!("Actual is {pct}% under budget"),
            (Baseline::Income, true) => format!("Expenses exceed income by {pct}%"),
            (Baseline::Income, false) => format!("{pct}% of income saved"),
            (Baseline::Other, true) => {
                format!("{} is {pct}% higher than {}", self.right_label, self.left_label)
            }
            (Baseline::Other, false) => {
                format!("{} is {pct}% lower than {}", self.right_label, self.left_label)
            }
        };
        Annotation { text, warning }
    }

    fn right_bar_color(&self) -> &'static str {
        match self.baseline() {
            Baseline::Budget | Baseline::Income if self.is_warning() => WARNING_BAR_COLOR,
            _ => NEUTRAL_BAR_COLOR,
        }
    }

    pub fn layout(&self) -> ChartLayout {
        let inner_width = (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
        let inner_height = (self.height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);

        let largest = self.left_value.max(self.right_value);
        let domain_max = if largest > 0.0 { largest * HEADROOM } else { 1.0 };
        let scale_y = |value: f64| inner_height - (value.max(0.0) / domain_max) * inner_height;

        // Band scale with equal inner and outer padding, centred in the range.
        let bands = 2.0;
        let step = inner_width / (bands - BAND_PADDING + 2.0 * BAND_PADDING);
        let bandwidth = step * (1.0 - BAND_PADDING);
        let start = (inner_width - step * (bands - BAND_PADDING)) / 2.0;

        let bar = |index: f64, label: &str, value: f64, color: &'static str| {
            let y = scale_y(value);
            Bar {
                label: label.to_string(),
                value_label: format_currency(value),
                x: start + step * index,
                y,
                width: bandwidth,
                height: inner_height - y,
                color,
            }
        };

        let bars = [
            bar(0.0, &self.left_label, self.left_value, LEFT_BAR_COLOR),
            bar(
                1.0,
                &self.right_label,
                self.right_value,
                self.right_bar_color(),
            ),
        ];

        let ticks = nice_ticks(domain_max, TARGET_TICKS)
            .into_iter()
            .map(|value| Tick {
                value,
                y: scale_y(value),
                label: format_currency(value),
            })
            .collect();

        ChartLayout {
            inner_width,
            inner_height,
            domain_max,
            bars,
            ticks,
            annotation: self.annotation(),
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round tick values from 0 to `max` with a 1, 2 or 5 times a power of ten step.
pub fn nice_ticks(max: f64, target: f64) -> Vec<f64> {
    if max <= 0.0 || !max.is_finite() || target < 1.0 {
        return vec![0.0];
    }

    let raw_step = max / target;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let step = magnitude
        * if residual >= 5.0 {
            10.0
        } else if residual >= 2.0 {
            5.0
        } else if residual >= 1.0 {
            2.0
        } else {
            1.0
        };

    let count = (max / step).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}
