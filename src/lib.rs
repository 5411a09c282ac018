//! # ZenLife
//!
//! Personal life organizer - the data and rules behind a small web app that
//! keeps a task calendar, a bill timeline with live countdowns, a grocery
//! list grouped by category, and a summary dashboard.
//!
//! ## Modules
//!
//! - [`records`]: Record types, draft validation and the id-keyed collection
//! - [`tasks`]: Task board and the monthly calendar grid
//! - [`bills`]: Bill timeline and due-date countdowns
//! - [`grocery`]: Categorized grocery ledger
//! - [`summary`]: Totals, status counts and pie chart layout
//! - [`seed`]: Embedded sample datasets for each page
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use zenlife::bills::SystemClock;
//! use zenlife::records::TaskDraft;
//! use zenlife::{seed, TaskStatus};
//!
//! let mut board = seed::task_board()?;
//! let draft = TaskDraft {
//!     title: "Renew passport".to_string(),
//!     date: "2025-07-30".to_string(),
//!     status: TaskStatus::Pending,
//! };
//! let id = board.add(&draft)?;
//! assert!(board.get(id).is_some());
//!
//! let tracker = seed::bill_tracker()?;
//! let board = tracker.tick_with(&SystemClock, 2);
//! println!("due soon: {}", board.is_due_soon());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bills;
pub mod config;
pub mod grocery;
pub mod records;
pub mod seed;
pub mod summary;
pub mod tasks;

// Re-export top-level types for convenience
pub use records::{
    Bill, BillDraft, CategoryCount, Collection, GroceryDraft, GroceryItem, OrganizerError,
    OrganizerResult, Record, Task, TaskDraft, TaskSnapshot, TaskStatus, ValidationError,
};

pub use tasks::{CalendarCell, CalendarError, CalendarMonth, StatusFilter, TaskBoard};

pub use bills::{BillTracker, Clock, Countdown, CountdownBoard, FixedClock, SystemClock};

pub use grocery::{Confirmation, GroceryLedger};

pub use summary::{PieSlice, SeriesPoint, StatusCounts, SummaryData};

pub use seed::{SeedError, SeedResult};

pub use config::{Config, ConfigError, CountdownConfig, DisplayConfig, LoggingConfig};
