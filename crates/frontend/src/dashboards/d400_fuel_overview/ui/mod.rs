pub mod dashboard;

pub use dashboard::FuelOverviewDashboard;
