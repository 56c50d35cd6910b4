use serde::{Deserialize, Serialize};

/// Direction of a recorded price change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FluctuationType {
    Increase,
    Decrease,
    #[serde(rename = "No Change")]
    NoChange,
    /// First price of a fuel type ("-") or any value the API adds later
    #[default]
    #[serde(other)]
    Unspecified,
}

impl FluctuationType {
    pub fn label(&self) -> &'static str {
        match self {
            FluctuationType::Increase => "Increase",
            FluctuationType::Decrease => "Decrease",
            FluctuationType::NoChange => "No Change",
            FluctuationType::Unspecified => "-",
        }
    }

    /// CSS modifier for the change column
    pub fn css_class(&self) -> &'static str {
        match self {
            FluctuationType::Increase => "change--up",
            FluctuationType::Decrease => "change--down",
            _ => "change--flat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_values_fall_back() {
        let t: FluctuationType = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(t, FluctuationType::Unspecified);
        let t: FluctuationType = serde_json::from_str("\"No Change\"").unwrap();
        assert_eq!(t, FluctuationType::NoChange);
        assert_eq!(t.css_class(), "change--flat");
    }
}
