use crate::shared::components::DashboardSection;
use contracts::dashboards::d410_market_survey::ExecutiveSummary;
use leptos::prelude::*;

#[component]
pub fn ExecutiveSummaryView(summary: ExecutiveSummary) -> impl IntoView {
    let ExecutiveSummary {
        headline,
        recommendation,
        highlights,
    } = summary;

    view! {
        <DashboardSection title="Executive Summary & Recommendation">
            <div class="summary__recommendation">
                <h3 class="summary__headline">{headline}</h3>
                <p>{recommendation}</p>
            </div>
            <div class="summary__highlights">
                {highlights
                    .into_iter()
                    .map(|h| view! {
                        <div class="summary__highlight">
                            <h3 class="summary__highlight-title">{h.title}</h3>
                            <p class="summary__highlight-text">{h.text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </DashboardSection>
    }
}
