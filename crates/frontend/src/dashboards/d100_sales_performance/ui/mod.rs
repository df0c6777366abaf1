mod dashboard;
mod filter_sidebar;

pub use dashboard::SalesPerformanceDashboard;
pub use filter_sidebar::FilterSidebar;
