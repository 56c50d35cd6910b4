pub mod d400_fuel_overview;
pub mod d401_reports;

pub use d400_fuel_overview::ui::FuelOverviewDashboard;
pub use d401_reports::ui::ReportsDashboard;
