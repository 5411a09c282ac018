//! Page Records
//!
//! Shared building blocks for the organizer pages:
//!
//! - **types**: Task, Bill, GroceryItem and the summary snapshot types
//! - **collection**: id-keyed, revisioned record list
//! - **draft**: string-valued form submissions and their validation
//! - **error**: validation and mutation errors

pub mod collection;
pub mod draft;
pub mod error;
pub mod types;

pub use collection::{Collection, Record};
pub use draft::{BillDraft, GroceryDraft, TaskDraft, DATE_FORMAT};
pub use error::{OrganizerError, OrganizerResult, ValidationError};
pub use types::{Bill, CategoryCount, GroceryItem, Task, TaskSnapshot, TaskStatus};
