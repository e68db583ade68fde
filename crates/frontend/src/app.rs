use crate::dashboards::SurveyDashboard;
use contracts::dashboards::d410_market_survey::SurveyDashboardConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Survey content is fixed at build time and handed to the dashboard once.
    let config = SurveyDashboardConfig::builtin();
    log::debug!(
        "mounting survey dashboard: {} respondents",
        config.survey.respondents
    );

    let page_title = format!("{} | {}", config.header.brand, config.header.title);
    document().set_title(&page_title);

    view! {
        <ConfigProvider>
            <SurveyDashboard config=config />
        </ConfigProvider>
    }
}
