use contracts::projections::p900_fuel_inventory::FuelInventoryDto;

#[derive(Debug, Clone, PartialEq)]
pub struct StockTotal {
    pub fuel_type_name: String,
    pub total: f64,
}

/// Stock summed per fuel type, in order of first appearance
pub fn stock_by_fuel_type(rows: &[FuelInventoryDto]) -> Vec<StockTotal> {
    let mut totals: Vec<StockTotal> = Vec::new();
    for row in rows {
        match totals
            .iter_mut()
            .find(|t| t.fuel_type_name == row.fuel_type_name)
        {
            Some(total) => total.total += row.current_stock,
            None => totals.push(StockTotal {
                fuel_type_name: row.fuel_type_name.clone(),
                total: row.current_stock,
            }),
        }
    }
    totals
}

pub fn total_stock(rows: &[FuelInventoryDto]) -> f64 {
    rows.iter().map(|r| r.current_stock).sum()
}
