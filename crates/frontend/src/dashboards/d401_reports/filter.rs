use crate::shared::entity_form::SelectOption;
use crate::shared::list_utils::filter_by_fuel_type;
use contracts::domain::a007_fuel_transaction::FuelTransaction;
use contracts::projections::p900_fuel_inventory::FuelInventoryDto;
use contracts::projections::p901_price_fluctuations::PriceFluctuationDto;

/// Report shown in the Reports sub-tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    Inventory,
    Transactions,
    PriceFluctuations,
}

impl ReportKind {
    pub fn all() -> [ReportKind; 3] {
        [
            ReportKind::Inventory,
            ReportKind::Transactions,
            ReportKind::PriceFluctuations,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "inventory",
            ReportKind::Transactions => "transactions",
            ReportKind::PriceFluctuations => "priceFluctuations",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "Current Inventory",
            ReportKind::Transactions => "All Transactions",
            ReportKind::PriceFluctuations => "Price Fluctuations",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "Current Fuel Inventory",
            ReportKind::Transactions => "All Fuel Transactions",
            ReportKind::PriceFluctuations => "Fuel Price Fluctuations",
        }
    }
}

/// Reports filter; empty strings mean "all"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub fuel_type: String,
    /// Inventory only
    pub location_type: String,
}

impl ReportFilter {
    pub fn is_active(&self) -> bool {
        !self.fuel_type.is_empty() || !self.location_type.is_empty()
    }

    pub fn selects_fuel_type(&self, name: &str) -> bool {
        self.fuel_type == name
    }

    pub fn inventory(&self, rows: &[FuelInventoryDto]) -> Vec<FuelInventoryDto> {
        let mut rows = filter_by_fuel_type(rows, &self.fuel_type);
        if !self.location_type.is_empty() {
            rows.retain(|r| r.location_type == self.location_type);
        }
        rows
    }

    pub fn transactions(&self, rows: &[FuelTransaction]) -> Vec<FuelTransaction> {
        filter_by_fuel_type(rows, &self.fuel_type)
    }

    pub fn fluctuations(&self, rows: &[PriceFluctuationDto]) -> Vec<PriceFluctuationDto> {
        filter_by_fuel_type(rows, &self.fuel_type)
    }
}

/// Fuel-type filter entries; the name is both value and label
pub fn fuel_type_options(names: Vec<String>) -> Vec<SelectOption> {
    names
        .into_iter()
        .map(|name| SelectOption::new(name.clone(), name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p900_fuel_inventory::summary::total_stock;

    fn inventory(id: i64, fuel: &str, location_type: &str, stock: f64) -> FuelInventoryDto {
        FuelInventoryDto {
            inventory_id: id,
            fuel_type_name: fuel.to_string(),
            location_type: location_type.to_string(),
            location_name: None,
            current_stock: stock,
            last_updated: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_inventory_filter_combines_fuel_and_location() {
        let rows = vec![
            inventory(1, "Diesel", "Warehouse", 100.0),
            inventory(2, "Diesel", "Site", 20.0),
            inventory(3, "Octane 92", "Site", 5.0),
        ];

        let all = ReportFilter::default();
        assert!(!all.is_active());
        assert_eq!(all.inventory(&rows).len(), 3);

        let diesel_sites = ReportFilter {
            fuel_type: "Diesel".to_string(),
            location_type: "Site".to_string(),
        };
        let filtered = diesel_sites.inventory(&rows);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].inventory_id, 2);
        assert_eq!(total_stock(&filtered), 20.0);

        let sites = ReportFilter {
            location_type: "Site".to_string(),
            ..Default::default()
        };
        assert_eq!(total_stock(&sites.inventory(&rows)), 25.0);
    }

    #[test]
    fn test_fuel_type_options_follow_filter() {
        let options = fuel_type_options(vec!["Diesel".to_string(), "Octane 95".to_string()]);
        assert_eq!(
            options,
            vec![
                SelectOption::new("Diesel", "Diesel"),
                SelectOption::new("Octane 95", "Octane 95"),
            ]
        );

        let filter = ReportFilter {
            fuel_type: "Octane 95".to_string(),
            ..Default::default()
        };
        let selected: Vec<&str> = options
            .iter()
            .filter(|o| filter.selects_fuel_type(&o.value))
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Octane 95"]);
    }

    #[test]
    fn test_report_keys() {
        let keys: Vec<&str> = ReportKind::all().iter().map(|k| k.key()).collect();
        assert_eq!(keys, vec!["inventory", "transactions", "priceFluctuations"]);
        assert_eq!(ReportKind::default(), ReportKind::Inventory);
    }
}
