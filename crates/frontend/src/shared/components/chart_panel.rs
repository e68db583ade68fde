use crate::shared::charts::{BarChart, PieChart};
use contracts::dashboards::d410_market_survey::{ChartKind, ChartPanel};
use leptos::prelude::*;

/// One chart with its optional heading and caption.
///
/// Chart points are derived from the series on every render.
#[component]
pub fn ChartPanelView(panel: ChartPanel) -> impl IntoView {
    let ChartPanel {
        title,
        chart,
        caption,
    } = panel;
    let points = chart.series.points();

    let chart_view = match chart.kind {
        ChartKind::Bar { y_domain, legend } => view! {
            <BarChart points=points y_domain=y_domain legend=legend tooltip=chart.tooltip />
        }
        .into_any(),
        ChartKind::Pie => view! {
            <PieChart points=points tooltip=chart.tooltip />
        }
        .into_any(),
    };

    view! {
        <div class="chart-panel">
            {title.map(|t| view! { <h3 class="chart-panel__title">{t}</h3> })}
            <div class="chart-panel__chart">{chart_view}</div>
            {caption.map(|c| view! { <p class="chart-panel__caption">{c}</p> })}
        </div>
    }
}
