use contracts::dashboards::d410_market_survey::InsightBox;
use leptos::prelude::*;

#[component]
pub fn InsightBoxView(insights: InsightBox) -> impl IntoView {
    let InsightBox {
        heading,
        paragraphs,
        recommendation,
    } = insights;

    view! {
        <div class="insight-box">
            <h3 class="insight-box__heading">{heading}</h3>
            {paragraphs
                .into_iter()
                .map(|p| view! { <p class="insight-box__text">{p}</p> })
                .collect_view()}
            {recommendation.map(|r| view! {
                <p class="insight-box__text">
                    <span class="insight-box__label">"Recommendation:"</span>
                    " "
                    {r}
                </p>
            })}
        </div>
    }
}
