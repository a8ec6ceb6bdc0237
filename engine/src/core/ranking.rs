//! Ordering rules for performer listings

use std::cmp::Ordering;

use crate::core::performer::Performer;

/// Richest first; ties broken by name, then id
pub fn by_worth_desc(a: &Performer, b: &Performer) -> Ordering {
    b.worth()
        .cmp(&a.worth())
        .then_with(|| a.name().cmp(&b.name()))
        .then_with(|| a.id().cmp(b.id()))
}

/// Oldest first; ties broken by id
pub fn by_creation(a: &Performer, b: &Performer) -> Ordering {
    a.created_at()
        .cmp(&b.created_at())
        .then_with(|| a.id().cmp(b.id()))
}

/// Sort by worth descending and keep at most `limit` entries
pub fn top_by_worth(mut performers: Vec<Performer>, limit: Option<usize>) -> Vec<Performer> {
    performers.sort_by(by_worth_desc);
    if let Some(limit) = limit {
        performers.truncate(limit);
    }
    performers
}
