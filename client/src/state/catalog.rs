//! Equipment list filter form state.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use lending_portal::models::{Equipment, EquipmentFilter};

/// Raw filter inputs as the user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    pub search: String,
    pub category: String,
    pub available_only: bool,
}

impl CatalogFilters {
    /// Filter sent to the server. An unticked availability box sends
    /// nothing rather than `false`.
    pub fn to_filter(&self) -> EquipmentFilter {
        EquipmentFilter {
            category: Some(self.category.clone()).filter(|c| !c.trim().is_empty()),
            available_only: self.available_only.then_some(true),
            search: Some(self.search.clone()).filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Distinct categories of `items`, in first-seen order.
pub fn categories(items: &[Equipment]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !item.category.is_empty() && !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

/// Items a student can currently request.
pub fn requestable(items: Vec<Equipment>) -> Vec<Equipment> {
    items.into_iter().filter(Equipment::is_requestable).collect()
}

/// "Showing N equipment(s)" summary line.
pub fn count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Showing {count} equipment{plural}")
}
