use serde::{Deserialize, Serialize};

/// Countries orders are shipped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    Canada,
    Mexico,
    Germany,
    Japan,
    France,
    #[serde(rename = "UK")]
    Uk,
    Australia,
}

impl Country {
    pub fn label(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Canada => "Canada",
            Country::Mexico => "Mexico",
            Country::Germany => "Germany",
            Country::Japan => "Japan",
            Country::France => "France",
            Country::Uk => "UK",
            Country::Australia => "Australia",
        }
    }

    /// All countries in the order the generator draws from
    pub fn all() -> Vec<Country> {
        vec![
            Country::Usa,
            Country::Canada,
            Country::Mexico,
            Country::Germany,
            Country::Japan,
            Country::France,
            Country::Uk,
            Country::Australia,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(Country::from_label("UK"), Some(Country::Uk));
        assert_eq!(Country::from_label("USA"), Some(Country::Usa));
        assert_eq!(Country::from_label("usa"), None);
        assert_eq!(Country::all().len(), 8);
    }
}
