//! Grocery Ledger
//!
//! Shopping-list items grouped by category. Each item belongs to exactly one
//! category; moving an item is a remove from the old list plus an append to
//! the new one, so the total item count never changes on edit.
//!
//! Ids are unique across the whole ledger, not per category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::records::{
    CategoryCount, GroceryDraft, GroceryItem, OrganizerError, OrganizerResult, Record,
};

/// Explicit answer to a delete prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Category name → items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryLedger {
    categories: BTreeMap<String, Vec<GroceryItem>>,
    #[serde(skip)]
    revision: u64,
}

impl GroceryLedger {
    pub fn new(categories: BTreeMap<String, Vec<GroceryItem>>) -> Self {
        Self {
            categories,
            revision: 0,
        }
    }

    /// Category names in display order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Items in `category`; empty for unknown categories
    pub fn items(&self, category: &str) -> &[GroceryItem] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_items(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Locate an item anywhere in the ledger
    pub fn find(&self, id: u32) -> Option<(&str, &GroceryItem)> {
        self.categories.iter().find_map(|(category, items)| {
            items
                .iter()
                .find(|item| item.id == id)
                .map(|item| (category.as_str(), item))
        })
    }

    /// max id over every category + 1, or 1 for an empty ledger
    pub fn next_id(&self) -> OrganizerResult<u32> {
        match self.categories.values().flatten().map(Record::id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(OrganizerError::IdSpaceExhausted),
        }
    }

    /// Per-category item counts in display order
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        self.categories
            .iter()
            .map(|(category, items)| CategoryCount {
                category: category.clone(),
                count: items.len(),
            })
            .collect()
    }

    /// Validate and append a new item to the draft's category
    pub fn add(&mut self, draft: &GroceryDraft) -> OrganizerResult<u32> {
        let (category, mut item) = draft.validate().map_err(|e| {
            tracing::warn!(error = %e, "Rejected new grocery item");
            e
        })?;
        let id = self.next_id()?;
        let items = self
            .categories
            .get_mut(&category)
            .ok_or_else(|| OrganizerError::UnknownCategory(category.clone()))?;

        item.set_id(id);
        items.push(item);
        self.revision += 1;
        tracing::debug!(id, category = %category, "Added grocery item");
        Ok(id)
    }

    /// Overwrite item `id` currently in `current`, moving it when the
    /// draft names another category. `Ok(false)` if the item is not there,
    /// whatever category the draft names.
    pub fn edit(&mut self, current: &str, id: u32, draft: &GroceryDraft) -> OrganizerResult<bool> {
        let (target, mut updated) = draft.validate().map_err(|e| {
            tracing::warn!(id, error = %e, "Rejected grocery edit");
            e
        })?;
        let Some(index) = self
            .categories
            .get(current)
            .and_then(|items| items.iter().position(|item| item.id == id))
        else {
            return Ok(false);
        };
        if !self.categories.contains_key(&target) {
            return Err(OrganizerError::UnknownCategory(target));
        }
        let Some(source) = self.categories.get_mut(current) else {
            return Ok(false);
        };
        updated.set_id(id);

        if target == current {
            source[index] = updated;
        } else {
            source.remove(index);
            if let Some(destination) = self.categories.get_mut(&target) {
                destination.push(updated);
            }
            tracing::debug!(id, from = %current, to = %target, "Moved grocery item");
        }
        self.revision += 1;
        Ok(true)
    }

    /// Remove item `id` from `category` once the user has confirmed
    pub fn delete(
        &mut self,
        category: &str,
        id: u32,
        confirmation: Confirmation,
    ) -> OrganizerResult<Option<GroceryItem>> {
        if confirmation != Confirmation::Confirmed {
            tracing::debug!(id, "Grocery delete declined");
            return Err(OrganizerError::DestructiveActionUnconfirmed);
        }
        let Some(items) = self.categories.get_mut(category) else {
            return Ok(None);
        };
        let Some(index) = items.iter().position(|item| item.id == id) else {
            return Ok(None);
        };
        let removed = items.remove(index);
        self.revision += 1;
        tracing::debug!(id, category = %category, "Deleted grocery item");
        Ok(Some(removed))
    }
}
