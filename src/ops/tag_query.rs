use crate::model::Tag;

/// Case-insensitive substring filter over a tag snapshot, preserving the
/// snapshot's order.
pub fn filter_tags<'a>(tags: &'a [Tag], filter: &str) -> Vec<&'a Tag> {
    let needle = filter.to_lowercase();
    tags.iter()
        .filter(|tag| tag.name.to_lowercase().contains(&needle))
        .collect()
}

/// The menu offers a "create" affordance only when a non-empty filter
/// matched nothing.
pub fn offers_create(match_count: usize, filter: &str) -> bool {
    match_count == 0 && !filter.is_empty()
}
