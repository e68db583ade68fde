use leptos::prelude::*;
use thaw::Card;

/// Titled card used for the top-level dashboard blocks.
#[component]
pub fn DashboardSection(
    /// Section heading
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style="margin-bottom: var(--spacing-lg);">
            <div class="dashboard-section">
                <h2 class="dashboard-section__title">{title}</h2>
                {children()}
            </div>
        </Card>
    }
}
