//! Pages
//!
//! Top-level page components for each route.

pub mod bills;
pub mod grocery;
pub mod settings;
pub mod summary;
pub mod tasks;

pub use bills::Bills;
pub use grocery::Grocery;
pub use settings::Settings;
pub use summary::Summary;
pub use tasks::Tasks;
