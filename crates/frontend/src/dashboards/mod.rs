pub mod d100_sales_performance;

pub use d100_sales_performance::ui::{FilterSidebar, SalesPerformanceDashboard};
