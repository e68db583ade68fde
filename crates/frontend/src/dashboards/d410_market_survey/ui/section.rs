use crate::shared::components::{ChartPanelView, InsightBoxView};
use contracts::dashboards::d410_market_survey::SectionContent;
use leptos::prelude::*;

/// Body of one tab: its charts followed by the insight box.
///
/// Several charts sit side by side in a grid; a single chart takes the
/// full width.
#[component]
pub fn SectionView(content: SectionContent) -> impl IntoView {
    let SectionContent {
        id,
        title,
        panels,
        insights,
    } = content;

    let grid_class = match panels.len() {
        0 | 1 => "survey-section__charts",
        2 => "survey-section__charts survey-section__charts--cols-2",
        _ => "survey-section__charts survey-section__charts--cols-3",
    };

    view! {
        <div class="survey-section" data-section=id.key()>
            <h2 class="survey-section__title">{title}</h2>
            <div class=grid_class>
                {panels
                    .into_iter()
                    .map(|panel| view! { <ChartPanelView panel=panel /> })
                    .collect_view()}
            </div>
            <InsightBoxView insights=insights />
        </div>
    }
}
