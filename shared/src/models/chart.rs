//! Geometry for the games-per-day bar chart.
//!
//! The canvas renderer in the front end only replays the primitives computed
//! here, so everything about scaling and placement is testable natively.

use crate::dto::analytics::ChartData;

pub const CHART_HEIGHT: f64 = 300.0;
pub const GRID_BANDS: usize = 5;
pub const PLACEHOLDER_TEXT: &str = "No data available";

const BAR_SHARE: f64 = 0.7;
const GAP_SHARE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const PADDING: Padding = Padding {
    top: 20.0,
    right: 20.0,
    bottom: 40.0,
    left: 50.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextMark {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub gridlines: Vec<GridLine>,
    pub bars: Vec<Rect>,
    pub x_labels: Vec<TextMark>,
    pub y_ticks: Vec<TextMark>,
    /// Bottom of the plot area, used as the gradient's start.
    pub baseline: f64,
    pub plot_height: f64,
    pub max_value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartScene {
    Placeholder(TextMark),
    Bars(BarLayout),
}

/// Largest value with a floor of 1 so an all-zero series never divides by zero.
pub fn scale_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(1.0, f64::max)
}

pub fn layout_chart(data: &ChartData, width: f64, height: f64) -> ChartScene {
    if data.is_empty() {
        return ChartScene::Placeholder(TextMark {
            text: PLACEHOLDER_TEXT.to_string(),
            x: width / 2.0,
            y: height / 2.0,
        });
    }

    let max_value = scale_max(&data.values);
    let plot_width = width - PADDING.left - PADDING.right;
    let plot_height = height - PADDING.top - PADDING.bottom;
    let slot = plot_width / data.labels.len() as f64;
    let bar_width = slot * BAR_SHARE;
    let bar_gap = slot * GAP_SHARE;
    let baseline = PADDING.top + plot_height;

    let band_y = |i: usize| PADDING.top + (plot_height / GRID_BANDS as f64) * i as f64;

    let gridlines = (0..=GRID_BANDS)
        .map(|i| GridLine {
            y: band_y(i),
            x_start: PADDING.left,
            x_end: width - PADDING.right,
        })
        .collect();

    let bar_x = |idx: usize| PADDING.left + idx as f64 * (bar_width + bar_gap) + bar_gap / 2.0;

    let bars = data
        .points()
        .enumerate()
        .map(|(idx, (_, value))| {
            let bar_height = (value.max(0.0) / max_value) * plot_height;
            Rect {
                x: bar_x(idx),
                y: baseline - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect();

    let x_labels = data
        .labels
        .iter()
        .enumerate()
        .map(|(idx, label)| TextMark {
            text: label.clone(),
            x: bar_x(idx) + bar_width / 2.0,
            y: height - 10.0,
        })
        .collect();

    let y_ticks = (0..=GRID_BANDS)
        .map(|j| {
            let value = (max_value - (max_value / GRID_BANDS as f64) * j as f64).round();
            TextMark {
                text: format!("{}", value as i64),
                x: PADDING.left - 10.0,
                y: band_y(j) + 4.0,
            }
        })
        .collect();

    ChartScene::Bars(BarLayout {
        gridlines,
        bars,
        x_labels,
        y_ticks,
        baseline,
        plot_height,
        max_value,
    })
}

/// Rows for the screen-reader table mirrored under the canvas.
pub fn table_rows(data: &ChartData) -> Vec<(String, String)> {
    data.points()
        .map(|(label, value)| (label.to_string(), format_value(value)))
        .collect()
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
