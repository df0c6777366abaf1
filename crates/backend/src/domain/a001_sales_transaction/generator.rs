use chrono::{Days, NaiveDate};
use contracts::domain::a001_sales_transaction::SalesTransaction;
use contracts::enums::{Country, ProductCategory};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::dataset::Dataset;

/// Parameters of the synthetic dataset
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub seed: u64,
    pub records: usize,
    pub first_order_number: u32,
    pub start_date: NaiveDate,
    pub revenue_base: f64,
    pub revenue_span: f64,
    pub quantity_min: u32,
    pub quantity_max: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            records: 500,
            first_order_number: 100,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            revenue_base: 50.0,
            revenue_span: 1000.0,
            quantity_min: 1,
            quantity_max: 9,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("revenue_base must be positive, got {0}")]
    NonPositiveRevenueBase(f64),

    #[error("revenue_span must be a non-negative number, got {0}")]
    InvalidRevenueSpan(f64),

    #[error("quantity range {min}..={max} is empty or includes 0")]
    InvalidQuantityRange { min: u32, max: u32 },

    #[error("{records} daily order dates starting at {start} do not fit the calendar")]
    DateOverflow { start: NaiveDate, records: usize },

    #[error("{records} order numbers starting at {first} overflow u32")]
    OrderNumberOverflow { first: u32, records: usize },
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.revenue_base.is_finite() && self.revenue_base > 0.0) {
            return Err(GeneratorError::NonPositiveRevenueBase(self.revenue_base));
        }
        if !(self.revenue_span.is_finite() && self.revenue_span >= 0.0) {
            return Err(GeneratorError::InvalidRevenueSpan(self.revenue_span));
        }
        if self.quantity_min == 0 || self.quantity_min > self.quantity_max {
            return Err(GeneratorError::InvalidQuantityRange {
                min: self.quantity_min,
                max: self.quantity_max,
            });
        }
        if self.records > 0 {
            self.order_number(self.records - 1)?;
            self.order_date(self.records - 1)?;
        }
        Ok(())
    }

    fn order_number(&self, index: usize) -> Result<u32, GeneratorError> {
        u32::try_from(index)
            .ok()
            .and_then(|offset| self.first_order_number.checked_add(offset))
            .ok_or(GeneratorError::OrderNumberOverflow {
                first: self.first_order_number,
                records: self.records,
            })
    }

    fn order_date(&self, index: usize) -> Result<NaiveDate, GeneratorError> {
        self.start_date
            .checked_add_days(Days::new(index as u64))
            .ok_or(GeneratorError::DateOverflow {
                start: self.start_date,
                records: self.records,
            })
    }
}

/// Build the synthetic sales dataset.
///
/// The same settings always produce the same records: every random field is
/// drawn from a `StdRng` seeded with `settings.seed`.
pub fn generate(settings: &GeneratorSettings) -> Result<Dataset, GeneratorError> {
    settings.validate()?;

    let categories = ProductCategory::all();
    let countries = Country::all();
    let mut rng = StdRng::seed_from_u64(settings.seed);

    let mut records = Vec::with_capacity(settings.records);
    for index in 0..settings.records {
        let category = categories[rng.gen_range(0..categories.len())];
        let country = countries[rng.gen_range(0..countries.len())];
        let total_revenue = settings.revenue_base + rng.gen::<f64>() * settings.revenue_span;
        let quantity = rng.gen_range(settings.quantity_min..=settings.quantity_max);

        records.push(SalesTransaction {
            order_number: settings.order_number(index)?,
            category,
            country,
            total_revenue,
            quantity,
            order_date: settings.order_date(index)?,
        });
    }

    tracing::debug!(
        "Generated {} sales transactions (seed {})",
        records.len(),
        settings.seed
    );

    Ok(Dataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_dataset() {
        let settings = GeneratorSettings::default();
        let first = generate(&settings).unwrap();
        let second = generate(&settings).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(first.records()).unwrap(),
            serde_json::to_string(second.records()).unwrap()
        );
    }

    #[test]
    fn test_different_seed_different_dataset() {
        let first = generate(&GeneratorSettings::default()).unwrap();
        let second = generate(&GeneratorSettings {
            seed: 7,
            ..GeneratorSettings::default()
        })
        .unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_record_field_rules() {
        let dataset = generate(&GeneratorSettings::default()).unwrap();
        assert_eq!(dataset.len(), 500);

        let mut order_numbers = HashSet::new();
        for record in dataset.records() {
            assert!(record.total_revenue > 0.0);
            assert!(record.total_revenue >= 50.0 && record.total_revenue < 1050.0);
            assert!((1..=9).contains(&record.quantity));
            assert!(order_numbers.insert(record.order_number));
        }

        for pair in dataset.records().windows(2) {
            assert!(pair[0].order_date < pair[1].order_date);
            assert_eq!(pair[1].order_number, pair[0].order_number + 1);
        }

        let first = &dataset.records()[0];
        assert_eq!(first.order_number, 100);
        assert_eq!(first.order_date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(
            dataset.records()[499].order_date,
            NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
        );
    }

    #[test]
    fn test_all_categories_and_countries_drawn() {
        let dataset = generate(&GeneratorSettings::default()).unwrap();
        let categories: HashSet<_> = dataset.records().iter().map(|r| r.category).collect();
        let countries: HashSet<_> = dataset.records().iter().map(|r| r.country).collect();
        assert_eq!(categories.len(), 6);
        assert_eq!(countries.len(), 8);
    }

    #[test]
    fn test_zero_records() {
        let dataset = generate(&GeneratorSettings {
            records: 0,
            ..GeneratorSettings::default()
        })
        .unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_invalid_settings() {
        let base = GeneratorSettings::default();

        let err = generate(&GeneratorSettings {
            revenue_base: 0.0,
            ..base.clone()
        })
        .unwrap_err();
        assert_eq!(err, GeneratorError::NonPositiveRevenueBase(0.0));

        let err = generate(&GeneratorSettings {
            quantity_min: 0,
            ..base.clone()
        })
        .unwrap_err();
        assert_eq!(err, GeneratorError::InvalidQuantityRange { min: 0, max: 9 });

        let err = generate(&GeneratorSettings {
            first_order_number: u32::MAX,
            records: 2,
            ..base
        })
        .unwrap_err();
        assert!(matches!(err, GeneratorError::OrderNumberOverflow { .. }));
    }
}
