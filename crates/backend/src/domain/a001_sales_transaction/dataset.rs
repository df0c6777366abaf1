use contracts::dashboards::d100_sales_performance::CountryFilter;
use contracts::domain::a001_sales_transaction::{SalesTransaction, TransactionColumn};
use std::collections::BTreeSet;

/// Immutable collection of sales transactions.
///
/// Created once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<SalesTransaction>,
    columns: Vec<TransactionColumn>,
}

impl Dataset {
    /// Dataset exposing every column
    pub fn new(records: Vec<SalesTransaction>) -> Self {
        Self {
            records,
            columns: TransactionColumn::all(),
        }
    }

    pub fn records(&self) -> &[SalesTransaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> &[TransactionColumn] {
        &self.columns
    }

    /// Same records, exposing only the listed columns
    pub fn project(&self, columns: &[TransactionColumn]) -> Dataset {
        Dataset {
            records: self.records.clone(),
            columns: self
                .columns
                .iter()
                .copied()
                .filter(|c| columns.contains(c))
                .collect(),
        }
    }

    /// Distinct country labels, sorted
    pub fn countries(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.country.label())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn view(&self) -> TransactionView<'_> {
        self.filter(&CountryFilter::AllCountries)
    }

    pub fn filter(&self, filter: &CountryFilter) -> TransactionView<'_> {
        TransactionView {
            records: self
                .records
                .iter()
                .filter(|r| filter.matches(r.country.label()))
                .collect(),
            columns: &self.columns,
        }
    }
}

/// Borrowed subset of a dataset, produced by filtering
#[derive(Debug, Clone)]
pub struct TransactionView<'a> {
    records: Vec<&'a SalesTransaction>,
    columns: &'a [TransactionColumn],
}

impl<'a> TransactionView<'a> {
    pub fn records(&self) -> &[&'a SalesTransaction] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SalesTransaction> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_columns(&self, required: &[TransactionColumn]) -> bool {
        required.iter().all(|c| self.columns.contains(c))
    }

    pub fn total_revenue(&self) -> f64 {
        self.iter().map(|r| r.total_revenue).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_transaction::generator::{generate, GeneratorSettings};
    use contracts::enums::Country;

    fn dataset() -> Dataset {
        generate(&GeneratorSettings::default()).unwrap()
    }

    #[test]
    fn test_countries_sorted_and_distinct() {
        let countries = dataset().countries();
        assert_eq!(
            countries,
            vec!["Australia", "Canada", "France", "Germany", "Japan", "Mexico", "UK", "USA"]
        );
    }

    #[test]
    fn test_filter_by_country() {
        let dataset = dataset();
        for country in Country::all() {
            let view = dataset.filter(&CountryFilter::Country(country.label().to_string()));
            let expected = dataset
                .records()
                .iter()
                .filter(|r| r.country == country)
                .count();
            assert_eq!(view.len(), expected);
            assert!(view.iter().all(|r| r.country == country));
        }
    }

    #[test]
    fn test_all_countries_is_full_dataset() {
        let dataset = dataset();
        let view = dataset.filter(&CountryFilter::AllCountries);
        assert_eq!(view.len(), dataset.len());
        assert!(view.iter().zip(dataset.records()).all(|(a, b)| a == b));
    }

    #[test]
    fn test_unknown_country_is_empty() {
        let dataset = dataset();
        let view = dataset.filter(&CountryFilter::Country("Atlantis".to_string()));
        assert!(view.is_empty());
        assert_eq!(view.total_revenue(), 0.0);
    }

    #[test]
    fn test_project_drops_columns() {
        let dataset = dataset().project(&[TransactionColumn::Category, TransactionColumn::Quantity]);
        assert_eq!(
            dataset.columns(),
            &[TransactionColumn::Category, TransactionColumn::Quantity]
        );
        let view = dataset.view();
        assert!(view.has_columns(&[TransactionColumn::Quantity]));
        assert!(!view.has_columns(&[TransactionColumn::Quantity, TransactionColumn::TotalRevenue]));
        assert_eq!(view.len(), 500);
    }
}
