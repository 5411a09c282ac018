//! Form drafts
//!
//! Raw, string-valued form submissions and their validation into records.
//! Validated records come back with id 0; the owning collection assigns the
//! real id on insert.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::{Bill, GroceryItem, Task, TaskStatus};

/// Date format used by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    let raw = required(value, field)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| ValidationError::InvalidField {
        field,
        reason: e.to_string(),
    })
}

fn parse_decimal(value: &str, field: &'static str) -> Result<Decimal, ValidationError> {
    let raw = required(value, field)?;
    raw.parse::<Decimal>()
        .map_err(|e| ValidationError::InvalidField {
            field,
            reason: e.to_string(),
        })
}

fn parse_percent(value: &str) -> Result<u8, ValidationError> {
    let raw = value.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    let percent = raw
        .parse::<i64>()
        .map_err(|e| ValidationError::InvalidField {
            field: "Purchased",
            reason: e.to_string(),
        })?;
    u8::try_from(percent)
        .ok()
        .filter(|p| *p <= 100)
        .ok_or(ValidationError::PercentOutOfRange(percent))
}

/// Add/edit task form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub date: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    /// Blank form preset to `date`
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<Task, ValidationError> {
        Ok(Task {
            id: 0,
            title: required(&self.title, "Title")?,
            date: parse_date(&self.date, "Date")?,
            status: self.status,
        })
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            date: task.date.format(DATE_FORMAT).to_string(),
            status: task.status,
        }
    }
}

/// Add/edit bill form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillDraft {
    pub name: String,
    pub amount: String,
    pub due_date: String,
}

impl BillDraft {
    pub fn validate(&self) -> Result<Bill, ValidationError> {
        Ok(Bill {
            id: 0,
            name: required(&self.name, "Name")?,
            amount: parse_decimal(&self.amount, "Amount")?,
            due_date: parse_date(&self.due_date, "Due date")?,
        })
    }
}

impl From<&Bill> for BillDraft {
    fn from(bill: &Bill) -> Self {
        Self {
            name: bill.name.clone(),
            amount: bill.amount.to_string(),
            due_date: bill.due_date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Add/edit grocery form; `category` selects the destination list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryDraft {
    pub category: String,
    pub name: String,
    pub quantity: String,
    pub buyer: String,
    pub price: String,
    pub purchased: String,
}

impl GroceryDraft {
    /// Blank form targeting `category`
    pub fn in_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            purchased: "0".to_string(),
            ..Default::default()
        }
    }

    /// Returns the destination category and the item
    pub fn validate(&self) -> Result<(String, GroceryItem), ValidationError> {
        let category = required(&self.category, "Category")?;
        let item = GroceryItem {
            id: 0,
            name: required(&self.name, "Name")?,
            quantity: required(&self.quantity, "Quantity")?,
            buyer: required(&self.buyer, "Buyer")?,
            price: parse_decimal(&self.price, "Price")?,
            purchased: parse_percent(&self.purchased)?,
        };
        if item.price < Decimal::ZERO {
            return Err(ValidationError::InvalidField {
                field: "Price",
                reason: "must not be negative".to_string(),
            });
        }
        Ok((category, item))
    }

    /// Prefill from an existing item in `category`
    pub fn from_item(category: impl Into<String>, item: &GroceryItem) -> Self {
        Self {
            category: category.into(),
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            buyer: item.buyer.clone(),
            price: item.price.to_string(),
            purchased: item.purchased.to_string(),
        }
    }
}
