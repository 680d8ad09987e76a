use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary card above the sales table
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}
