//! Display Ordering
//!
//! Helper functions for list rendering.

use crate::config::ListMode;
use crate::models::Todo;

/// Incomplete todos first, newest first within each group.
///
/// `sort_by` is stable, so equal keys keep their arrival order.
pub fn display_order(items: &[Todo]) -> Vec<Todo> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    sorted
}

/// Items in the order they should be shown for the given list mode
pub fn visible_items(items: &[Todo], mode: ListMode) -> Vec<Todo> {
    match mode {
        ListMode::Flat => display_order(items),
        ListMode::Paged => items.to_vec(),
    }
}
