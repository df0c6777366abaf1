use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Country, ProductCategory};

/// A single order line of the sales dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTransaction {
    pub order_number: u32,
    pub category: ProductCategory,
    pub country: Country,
    /// Revenue of the order in USD, always positive
    pub total_revenue: f64,
    /// Units sold, at least 1
    pub quantity: u32,
    pub order_date: NaiveDate,
}

/// Columns a dataset can expose.
///
/// Labels are used as table headers and in notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionColumn {
    OrderNumber,
    Category,
    Country,
    TotalRevenue,
    Quantity,
    OrderDate,
}

impl TransactionColumn {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionColumn::OrderNumber => "Order Number",
            TransactionColumn::Category => "Category",
            TransactionColumn::Country => "Country",
            TransactionColumn::TotalRevenue => "TotalRevenue",
            TransactionColumn::Quantity => "Quantity",
            TransactionColumn::OrderDate => "Order Date",
        }
    }

    pub fn all() -> Vec<TransactionColumn> {
        vec![
            TransactionColumn::OrderNumber,
            TransactionColumn::Category,
            TransactionColumn::Country,
            TransactionColumn::TotalRevenue,
            TransactionColumn::Quantity,
            TransactionColumn::OrderDate,
        ]
    }
}
