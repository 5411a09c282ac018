//! UI Components
//!
//! Layout chrome and reusable widgets shared by the pages.

pub mod modal;
pub mod navbar;
pub mod pie_chart;
pub mod sidebar;

pub use modal::Modal;
pub use navbar::Navbar;
pub use pie_chart::{PieChart, BILL_COLORS, GROCERY_COLORS};
pub use sidebar::Sidebar;
