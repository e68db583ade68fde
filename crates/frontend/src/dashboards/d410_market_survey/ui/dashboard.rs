use super::section::SectionView;
use super::summary::ExecutiveSummaryView;
use contracts::dashboards::d410_market_survey::{SectionId, SectionNav, SurveyDashboardConfig};
use leptos::prelude::*;
use thaw::*;

/// Survey dashboard page: header, executive summary, section tabs and the
/// active section, footer.
///
/// All content comes from `config`; the only state is the active tab, which
/// starts at the default section on every mount.
#[component]
pub fn SurveyDashboard(config: SurveyDashboardConfig) -> impl IntoView {
    let SurveyDashboardConfig {
        header,
        survey,
        summary,
        sections,
    } = config;
    let sections = StoredValue::new(sections);

    let nav = RwSignal::new(SectionNav::new());
    // thaw's TabList speaks in string values
    let selected_tab_value = RwSignal::new(SectionId::default().key().to_string());

    Effect::new(move |_| {
        let value = selected_tab_value.get();
        match value.parse::<SectionId>() {
            Ok(id) => nav.update(|nav| {
                if nav.select(id) {
                    log::debug!("survey dashboard: section -> {}", id);
                }
            }),
            Err(err) => log::warn!("survey dashboard: {}", err),
        }
    });

    let active_section = move || {
        let nav = nav.get();
        sections.with_value(|s| {
            s.visible(&nav)
                .map(|content| view! { <SectionView content=content.clone() /> })
                .collect_view()
        })
    };

    view! {
        <div id="d410_market_survey--dashboard" class="survey-dashboard">
            <header class="survey-dashboard__header">
                <div class="survey-dashboard__brand">
                    <div class="survey-dashboard__logo">
                        <div class="survey-dashboard__logo-dot"></div>
                    </div>
                    <h1 class="survey-dashboard__brand-name">{header.brand}</h1>
                </div>
                <h2 class="survey-dashboard__title">{header.title}</h2>
                <p class="survey-dashboard__subtitle">{survey.responses_line()}</p>
            </header>

            <ExecutiveSummaryView summary=summary />

            <div class="survey-dashboard__tabs">
                <TabList selected_value=selected_tab_value>
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| view! { <Tab value=id.key()>{id.label()}</Tab> })
                        .collect_view()}
                </TabList>
            </div>

            <div class="survey-dashboard__content">{active_section}</div>

            <footer class="survey-dashboard__footer">
                <p>{survey.collection_line()}</p>
                <p class="survey-dashboard__copyright">{survey.copyright_line()}</p>
            </footer>
        </div>
    }
}
