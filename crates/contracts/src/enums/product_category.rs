use serde::{Deserialize, Serialize};

/// Product categories an order can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Very Long Electronics Category Name")]
    Electronics,
    #[serde(rename = "Peripherals & Accessories")]
    Peripherals,
    #[serde(rename = "Fiction & Non-Fiction Books")]
    Books,
    #[serde(rename = "Apparel & Footwear")]
    Apparel,
    #[serde(rename = "Home Goods & Decor")]
    HomeGoods,
    #[serde(rename = "Sports & Outdoors")]
    Sports,
}

impl ProductCategory {
    /// Display label, also the value used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Very Long Electronics Category Name",
            ProductCategory::Peripherals => "Peripherals & Accessories",
            ProductCategory::Books => "Fiction & Non-Fiction Books",
            ProductCategory::Apparel => "Apparel & Footwear",
            ProductCategory::HomeGoods => "Home Goods & Decor",
            ProductCategory::Sports => "Sports & Outdoors",
        }
    }

    /// All categories in the order the generator draws from
    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Electronics,
            ProductCategory::Peripherals,
            ProductCategory::Books,
            ProductCategory::Apparel,
            ProductCategory::HomeGoods,
            ProductCategory::Sports,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in ProductCategory::all() {
            assert_eq!(ProductCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(ProductCategory::from_label("Groceries"), None);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&ProductCategory::HomeGoods).unwrap();
        assert_eq!(json, "\"Home Goods & Decor\"");
    }
}
