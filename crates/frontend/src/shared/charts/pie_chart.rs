use super::palette::series_color;
use super::px;
use contracts::shared::chart::layout_pie;
use contracts::shared::format::TooltipFormat;
use contracts::shared::series::ChartPoint;
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 400.0;
const VIEW_HEIGHT: f64 = 256.0;
const OUTER_RADIUS: f64 = 80.0;

/// Pie with outside `name: share%` labels and a hover tooltip.
#[component]
pub fn PieChart(
    /// Points in display order; slices start at 3 o'clock
    points: Vec<ChartPoint>,
    /// How hovered values are shown
    tooltip: TooltipFormat,
) -> impl IntoView {
    let pie = layout_pie(&points, VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0, OUTER_RADIUS);
    let hovered = RwSignal::new(None::<usize>);

    let tips: Vec<(String, String)> = pie
        .slices
        .iter()
        .map(|slice| (slice.point.name.clone(), tooltip.format(slice.point.value)))
        .collect();

    let slices = pie
        .slices
        .iter()
        .filter(|slice| slice.is_visible())
        .map(|slice| {
            let i = slice.index;
            view! {
                <g class="pie-chart__slice">
                    <path
                        class="pie-chart__sector"
                        class:pie-chart__sector--active=move || hovered.get() == Some(i)
                        d=slice.path.clone()
                        fill=series_color(i)
                        stroke="#ffffff"
                        on:mouseenter=move |_| hovered.set(Some(i))
                        on:mouseleave=move |_| hovered.set(None)
                    />
                    <text
                        class="chart__slice-label"
                        x=px(slice.label_x)
                        y=px(slice.label_y)
                        text-anchor=slice.label_anchor.as_str()
                        fill=series_color(i)
                    >
                        {slice.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let tooltip_view = move || {
        hovered.get().and_then(|i| tips.get(i).cloned()).map(|(name, value)| {
            view! {
                <div class="chart__tooltip chart__tooltip--centered">
                    <div class="chart__tooltip-name">{name}</div>
                    <div class="chart__tooltip-value">{value}</div>
                </div>
            }
        })
    };

    view! {
        <div class="chart pie-chart">
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                width="100%"
                height="100%"
            >
                {slices}
            </svg>
            {tooltip_view}
        </div>
    }
}
