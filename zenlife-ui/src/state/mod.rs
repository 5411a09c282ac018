//! State Management
//!
//! App-wide context plus the hooks pages use to drive their own state.

pub mod global;
pub mod ticker;
