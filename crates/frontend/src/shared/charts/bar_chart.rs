use super::palette::PRIMARY;
use super::px;
use contracts::shared::chart::{layout_bars, Margin, PlotArea};
use contracts::shared::format::TooltipFormat;
use contracts::shared::series::ChartPoint;
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 256.0;
const MARGIN: Margin = Margin {
    top: 20.0,
    right: 30.0,
    bottom: 45.0,
    left: 60.0,
};

/// Hover tooltip anchored above a bar, in percent of the chart box.
#[derive(Clone)]
struct BarTip {
    name: String,
    value: String,
    left_pct: f64,
    top_pct: f64,
}

/// Single-series vertical bar chart with grid, value axis and legend.
#[component]
pub fn BarChart(
    /// Points in display order
    points: Vec<ChartPoint>,
    /// Fixed value axis; `None` fits the data from zero
    y_domain: Option<(f64, f64)>,
    /// Legend entry for the series
    #[prop(into)]
    legend: String,
    /// How hovered values are shown
    tooltip: TooltipFormat,
) -> impl IntoView {
    let area = PlotArea::inset(VIEW_WIDTH, VIEW_HEIGHT, MARGIN);
    let geometry = layout_bars(&points, y_domain, area);
    let hovered = RwSignal::new(None::<usize>);

    let tips: Vec<BarTip> = geometry
        .bars
        .iter()
        .map(|bar| BarTip {
            name: bar.point.name.clone(),
            value: tooltip.format(bar.point.value),
            left_pct: bar.band_center / VIEW_WIDTH * 100.0,
            top_pct: bar.y / VIEW_HEIGHT * 100.0,
        })
        .collect();

    let grid = geometry
        .ticks
        .iter()
        .map(|tick| {
            view! {
                <g class="bar-chart__tick">
                    <line
                        x1=px(area.x)
                        x2=px(area.right())
                        y1=px(tick.y)
                        y2=px(tick.y)
                        stroke="#e5e7eb"
                        stroke-dasharray="3 3"
                    />
                    <text
                        class="chart__axis-label"
                        x=px(area.x - 8.0)
                        y=px(tick.y + 4.0)
                        text-anchor="end"
                    >
                        {tick.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bars = geometry
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            view! {
                <g class="bar-chart__band">
                    <rect
                        class="bar-chart__bar"
                        class:bar-chart__bar--active=move || hovered.get() == Some(i)
                        x=px(bar.x)
                        y=px(bar.y)
                        width=px(bar.width)
                        height=px(bar.height)
                        fill=PRIMARY
                        on:mouseenter=move |_| hovered.set(Some(i))
                        on:mouseleave=move |_| hovered.set(None)
                    />
                    <text
                        class="chart__axis-label"
                        x=px(bar.band_center)
                        y=px(area.bottom() + 16.0)
                        text-anchor="middle"
                    >
                        {bar.point.name.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let tooltip_view = move || {
        hovered.get().and_then(|i| tips.get(i).cloned()).map(|tip| {
            let style = format!(
                "left: {:.2}%; top: {:.2}%;",
                tip.left_pct, tip.top_pct
            );
            view! {
                <div class="chart__tooltip" style=style>
                    <div class="chart__tooltip-name">{tip.name}</div>
                    <div class="chart__tooltip-value">{tip.value}</div>
                </div>
            }
        })
    };

    view! {
        <div class="chart bar-chart">
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                preserveAspectRatio="none"
                width="100%"
                height="100%"
            >
                {grid}
                <line
                    x1=px(area.x)
                    x2=px(area.x)
                    y1=px(area.y)
                    y2=px(area.bottom())
                    stroke="#9ca3af"
                />
                <line
                    x1=px(area.x)
                    x2=px(area.right())
                    y1=px(area.bottom())
                    y2=px(area.bottom())
                    stroke="#9ca3af"
                />
                {bars}
            </svg>
            {tooltip_view}
            <div class="chart__legend">
                <span class="chart__legend-swatch" style=format!("background: {};", PRIMARY)></span>
                <span class="chart__legend-label">{legend}</span>
            </div>
        </div>
    }
}
