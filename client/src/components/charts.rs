//! Lightweight dashboard charts drawn with plain markup.
//!
//! Bars are scaled against the largest value in their series, so an all-zero
//! series renders empty rather than dividing by zero.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;
use model::dashboard::{palette_color, scale_percent};
use model::{Dashboard, ProductivityPoint, ProgressBucket};

/// One labelled bar, already scaled to 0..=100.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub percent: u8,
    pub color: &'static str,
}

/// Scale `(label, value)` pairs into bars coloured by position.
pub fn bars<I>(series: I) -> Vec<Bar>
where
    I: IntoIterator<Item = (String, u64)>,
{
    let series: Vec<(String, u64)> = series.into_iter().collect();
    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0);
    series
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| Bar { label, value, percent: scale_percent(value, max), color: palette_color(i) })
        .collect()
}

pub fn productivity_bars(points: &[ProductivityPoint]) -> Vec<Bar> {
    bars(points.iter().map(|p| (p.date.clone(), p.completed)))
}

pub fn progress_bars(buckets: &[ProgressBucket]) -> Vec<Bar> {
    bars(buckets.iter().map(|b| (b.range.clone(), b.count)))
}

/// Status overview: one legend row per status with its share of all tasks.
#[component]
pub fn StatusChart(dashboard: Dashboard) -> impl IntoView {
    let shares = dashboard.status_shares();
    if shares.is_empty() {
        return view! { <p class="chart__empty">"No tasks."</p> }.into_any();
    }
    let rows = dashboard
        .status
        .iter()
        .zip(shares)
        .enumerate()
        .map(|(i, (slice, (status, pct)))| {
            let swatch = format!("background-color:{};", palette_color(i));
            let fill = format!("width:{pct}%;background-color:{};", palette_color(i));
            view! {
                <li class="chart__row">
                    <span class="chart__swatch" style=swatch></span>
                    <span class="chart__label">{status.to_string()}</span>
                    <span class="chart__track"><span class="chart__fill" style=fill></span></span>
                    <span class="chart__value">{format!("{} ({pct}%)", slice.value)}</span>
                </li>
            }
        })
        .collect_view();
    view! { <ul class="chart chart--status">{rows}</ul> }.into_any()
}

/// Vertical bar chart for a scaled series.
#[component]
pub fn BarChart(bars: Vec<Bar>, #[prop(into)] empty: String) -> impl IntoView {
    if bars.is_empty() {
        return view! { <p class="chart__empty">{empty}</p> }.into_any();
    }
    let columns = bars
        .into_iter()
        .map(|bar| {
            let style = format!("height:{}%;background-color:{};", bar.percent, bar.color);
            view! {
                <div class="chart__column" title=format!("{}: {}", bar.label, bar.value)>
                    <span class="chart__column-value">{bar.value}</span>
                    <span class="chart__column-bar" style=style></span>
                    <span class="chart__column-label">{bar.label.clone()}</span>
                </div>
            }
        })
        .collect_view();
    view! { <div class="chart chart--bars">{columns}</div> }.into_any()
}
