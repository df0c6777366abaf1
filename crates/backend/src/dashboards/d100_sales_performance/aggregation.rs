use contracts::dashboards::d100_sales_performance::{CategoryOrderRow, CategoryRevenueRow};
use std::collections::BTreeMap;

use crate::domain::a001_sales_transaction::TransactionView;

/// Order count and revenue per category, most orders first.
///
/// Groups come out in ascending label order and the sort is stable, so
/// categories with equal counts keep that order.
pub fn orders_by_category(view: &TransactionView<'_>) -> Vec<CategoryOrderRow> {
    let mut groups: BTreeMap<&'static str, (u64, f64)> = BTreeMap::new();
    for record in view.iter() {
        let entry = groups.entry(record.category.label()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.total_revenue;
    }

    let mut rows: Vec<CategoryOrderRow> = groups
        .into_iter()
        .map(|(category, (total_order, total_revenue))| CategoryOrderRow {
            category: category.to_string(),
            total_order,
            total_revenue,
        })
        .collect();
    rows.sort_by(|a, b| b.total_order.cmp(&a.total_order));
    rows
}

/// Revenue per category, highest first
pub fn revenue_by_category(view: &TransactionView<'_>) -> Vec<CategoryRevenueRow> {
    let mut groups: BTreeMap<&'static str, f64> = BTreeMap::new();
    for record in view.iter() {
        *groups.entry(record.category.label()).or_insert(0.0) += record.total_revenue;
    }

    let mut rows: Vec<CategoryRevenueRow> = groups
        .into_iter()
        .map(|(category, total_revenue)| CategoryRevenueRow {
            category: category.to_string(),
            total_revenue,
        })
        .collect();
    rows.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    rows
}

/// First `limit` rows of the order aggregate
pub fn top_categories(rows: &[CategoryOrderRow], limit: usize) -> Vec<CategoryOrderRow> {
    rows.iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_transaction::{generate, Dataset, GeneratorSettings};
    use chrono::NaiveDate;
    use contracts::dashboards::d100_sales_performance::CountryFilter;
    use contracts::domain::a001_sales_transaction::SalesTransaction;
    use contracts::enums::{Country, ProductCategory};

    fn record(order_number: u32, category: ProductCategory, revenue: f64) -> SalesTransaction {
        SalesTransaction {
            order_number,
            category,
            country: Country::Japan,
            total_revenue: revenue,
            quantity: 1,
            order_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_counts_and_sums_match_view() {
        let dataset = generate(&GeneratorSettings::default()).unwrap();
        for filter in [
            CountryFilter::AllCountries,
            CountryFilter::Country("USA".to_string()),
            CountryFilter::Country("Mexico".to_string()),
        ] {
            let view = dataset.filter(&filter);
            let orders = orders_by_category(&view);
            let revenue = revenue_by_category(&view);

            let count: u64 = orders.iter().map(|r| r.total_order).sum();
            assert_eq!(count as usize, view.len());

            let sum: f64 = revenue.iter().map(|r| r.total_revenue).sum();
            assert!((sum - view.total_revenue()).abs() < 1e-6);

            assert!(orders.windows(2).all(|w| w[0].total_order >= w[1].total_order));
            assert!(revenue
                .windows(2)
                .all(|w| w[0].total_revenue >= w[1].total_revenue));
        }
    }

    #[test]
    fn test_ties_keep_label_order() {
        let dataset = Dataset::new(vec![
            record(1, ProductCategory::Sports, 10.0),
            record(2, ProductCategory::Apparel, 20.0),
            record(3, ProductCategory::Books, 30.0),
            record(4, ProductCategory::Books, 5.0),
        ]);
        let rows = orders_by_category(&dataset.view());
        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "Fiction & Non-Fiction Books",
                "Apparel & Footwear",
                "Sports & Outdoors"
            ]
        );
        assert_eq!(rows[0].total_order, 2);
        assert_eq!(rows[0].total_revenue, 35.0);

        let revenue = revenue_by_category(&dataset.view());
        assert_eq!(revenue[0].category, "Fiction & Non-Fiction Books");
        assert_eq!(revenue[2].category, "Sports & Outdoors");
    }

    #[test]
    fn test_empty_view_gives_empty_aggregates() {
        let dataset = Dataset::new(vec![]);
        assert!(orders_by_category(&dataset.view()).is_empty());
        assert!(revenue_by_category(&dataset.view()).is_empty());
    }

    #[test]
    fn test_top_categories_limit() {
        let dataset = generate(&GeneratorSettings::default()).unwrap();
        let rows = orders_by_category(&dataset.view());
        assert_eq!(rows.len(), 6);
        let top = top_categories(&rows, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[..], rows[..5]);
    }
}
