use crate::dashboards::d100_sales_performance::api;
use crate::shared::components::ui::Select;
use contracts::dashboards::d100_sales_performance::{ALL_COUNTRIES, FILTER_HEADER, FILTER_LABEL};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Боковая панель с выбором страны
#[component]
pub fn FilterSidebar(selected_country: RwSignal<String>) -> impl IntoView {
    let (options, set_options) = signal(vec![ALL_COUNTRIES.to_string()]);
    let (label, set_label) = signal(FILTER_LABEL.to_string());
    let (error, set_error) = signal(None::<String>);

    // Load options on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_filter_options().await {
                Ok(filter) => {
                    set_label.set(filter.label);
                    set_options.set(filter.options);
                }
                Err(e) => {
                    log::error!("Failed to load D100 filter options: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <aside class="sidebar d100-sidebar">
            <h2 class="sidebar__header">{FILTER_HEADER}</h2>
            {move || {
                view! {
                    <Select
                        id="d100-country"
                        label=label.get()
                        value=selected_country
                        options=options
                        on_change=Callback::new(move |country: String| selected_country.set(country))
                    />
                }
            }}
            {move || {
                error.get().map(|e| view! { <div class="sidebar__error">"Failed to load countries: " {e}</div> })
            }}
        </aside>
    }
}
