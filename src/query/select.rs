// Selection of one result group for a (distance, category) choice

use crate::query::index::{CategoryKey, GroupIndex};
use crate::results::{RaceDataset, RacerRecord};

/// Resolves a selection to the racers of the matching result group.
///
/// The overall pseudo-category resolves to the distance's aggregate group;
/// any other category resolves to that exact category group. The racers
/// come back in stored export order, unsorted. A selection with no
/// matching group is a valid empty result, not an error: the UI renders a
/// "no results" state for it. There is no fallback to another distance and
/// no partial matching.
pub fn select<'a>(
    dataset: &'a RaceDataset,
    index: &GroupIndex,
    distance: &str,
    category: &str,
) -> &'a [RacerRecord] {
    let key = CategoryKey::from_selection(category);
    match index.lookup(distance, &key) {
        Some(position) => &dataset.results[position].racers,
        None => &[],
    }
}
