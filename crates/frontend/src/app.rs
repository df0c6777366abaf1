use crate::dashboards::d100_sales_performance::ui::{FilterSidebar, SalesPerformanceDashboard};
use crate::layout::Shell;
use contracts::dashboards::d100_sales_performance::ALL_COUNTRIES;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The only piece of UI state: the country picked in the sidebar.
    let selected_country = RwSignal::new(ALL_COUNTRIES.to_string());

    view! {
        <Shell
            left=move || view! { <FilterSidebar selected_country=selected_country /> }.into_any()
            center=move || {
                view! { <SalesPerformanceDashboard selected_country=selected_country /> }.into_any()
            }
        />
    }
}
