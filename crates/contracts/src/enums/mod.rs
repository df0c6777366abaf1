pub mod country;
pub mod product_category;

pub use country::Country;
pub use product_category::ProductCategory;
