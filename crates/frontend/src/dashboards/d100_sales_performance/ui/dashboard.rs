use crate::dashboards::d100_sales_performance::api;
use crate::shared::charts::ChartView;
use crate::shared::components::notice_banner::NoticeBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_money, format_number_int};
use contracts::dashboards::d100_sales_performance::{
    ChartPanel, SalesPerformanceResponse, TopCategoriesTable, PAGE_TITLE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sales Performance Dashboard component
#[component]
pub fn SalesPerformanceDashboard(selected_country: RwSignal<String>) -> impl IntoView {
    // Data state
    let (data, set_data) = signal(None::<SalesPerformanceResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Only the latest request may update the page
    let request_seq = StoredValue::new(0_u64);

    Effect::new(move |_| {
        let country = selected_country.get();
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_sales_performance(&country).await;
            if request_seq.get_value() != seq {
                log::debug!("Dropping stale D100 response for {}", country);
                return;
            }
            if let Err(e) = &result {
                log::error!("Failed to load D100 dashboard: {}", e);
            }
            let (response, failure) = settle(result);
            set_data.set(response);
            set_error.set(failure);
            set_loading.set(false);
        });
    });

    view! {
        <div id="d100_sales_performance--dashboard" class="d100-dashboard">
            <PageHeader title=PAGE_TITLE />
            {move || {
                data.get().map(|d| {
                    view! {
                        <div class="d100-summary">
                            {format!("{} · {} orders", d.title_suffix, format_number_int(d.record_count as f64))}
                        </div>
                    }
                })
            }}
            {move || {
                loading.get().then(|| view! { <div class="d100-loading">"Loading data..."</div> })
            }}
            {move || error.get().map(|e| view! { <div class="d100-error">"Error: " {e}</div> })}
            {move || data.get().map(render_response)}
        </div>
    }
}

/// Page state after a request: a failure replaces the previous response
fn settle(
    result: Result<SalesPerformanceResponse, String>,
) -> (Option<SalesPerformanceResponse>, Option<String>) {
    match result {
        Ok(response) => (Some(response), None),
        Err(e) => (None, Some(e)),
    }
}

fn render_response(response: SalesPerformanceResponse) -> impl IntoView {
    let notices = response
        .notices
        .into_iter()
        .map(|notice| view! { <NoticeBanner notice=notice /> })
        .collect_view();

    view! {
        <div class="d100-content">
            <div class="d100-notices">{notices}</div>
            <div class="d100-columns">
                <div class="d100-column">{response.orders_chart.map(chart_panel)}</div>
                <div class="d100-column">{response.revenue_chart.map(chart_panel)}</div>
            </div>
            {response.scatter_chart.map(chart_panel)}
            {response.top_categories.map(top_categories_table)}
        </div>
    }
}

fn chart_panel(panel: ChartPanel) -> impl IntoView {
    view! {
        <section class="d100-panel">
            <h3 class="d100-panel__heading">{panel.heading}</h3>
            <ChartView chart=panel.chart />
        </section>
    }
}

fn top_categories_table(table: TopCategoriesTable) -> impl IntoView {
    let headers = table
        .columns
        .into_iter()
        .map(|column| view! { <th class="table__header-cell">{column}</th> })
        .collect_view();

    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            view! {
                <tr class="table__row">
                    <td class="table__cell">{row.category}</td>
                    <td class="table__cell table__cell--number">
                        {format_number_int(row.total_order as f64)}
                    </td>
                    <td class="table__cell table__cell--number">{format_money(row.total_revenue)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="d100-panel">
            <h3 class="d100-panel__heading">{table.heading}</h3>
            <table class="table">
                <thead>
                    <tr>{headers}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_sales_performance::FilterOptions;

    fn response(country: &str) -> SalesPerformanceResponse {
        SalesPerformanceResponse {
            page_title: PAGE_TITLE.to_string(),
            filter: FilterOptions {
                label: "Select a Country:".to_string(),
                options: vec![country.to_string()],
                selected: country.to_string(),
            },
            title_suffix: country.to_string(),
            record_count: 1,
            orders_chart: None,
            revenue_chart: None,
            scatter_chart: None,
            top_categories: None,
            notices: Vec::new(),
        }
    }

    #[test]
    fn test_settle_success() {
        let (data, error) = settle(Ok(response("USA")));
        assert_eq!(data.map(|d| d.title_suffix), Some("USA".to_string()));
        assert!(error.is_none());
    }

    #[test]
    fn test_failed_request_clears_previous_page() {
        let (data, _) = settle(Ok(response("USA")));
        assert!(data.is_some());

        let (data, error) = settle(Err("HTTP error: 500".to_string()));
        assert!(data.is_none());
        assert_eq!(error.as_deref(), Some("HTTP error: 500"));
    }
}
