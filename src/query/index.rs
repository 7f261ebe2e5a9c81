// Keyed lookup of result groups by distance and category
//
// The export pre-computes one bucket per (distance, category) plus one
// aggregate bucket per distance. Selection resolves against an explicit
// keyed index built once from the dataset, never against the positional
// order of the Results sequence.

use std::cmp::Ordering;
use std::collections::HashMap;

use itertools::Itertools;

use crate::errors::FinishlineError;
use crate::results::RaceDataset;

/// Pseudo-category selecting the all-categories aggregate for a distance.
pub const OVERALL_CATEGORY: &str = "Overall";

/// Category half of a selection key.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum CategoryKey {
    /// The aggregate group of a distance.
    Overall,
    /// A single category group, e.g. "Female 40-49".
    Named(String),
}

impl CategoryKey {
    /// Maps a user-facing category choice to its lookup key.
    pub fn from_selection(category: &str) -> Self {
        if category == OVERALL_CATEGORY {
            CategoryKey::Overall
        } else {
            CategoryKey::Named(category.to_string())
        }
    }
}

/// Immutable index over the result groups of one dataset.
///
/// Built once at load time; lookups are O(1) and the distance/category
/// lists the UI populates its pickers from are computed here exactly once,
/// so what the pickers offer always matches what a lookup can return.
pub struct GroupIndex {
    groups: HashMap<(String, CategoryKey), usize>,
    distances: Vec<String>,
    categories: Vec<String>,
}

impl GroupIndex {
    /// Indexes every group under (distance, category-or-overall).
    ///
    /// Two groups claiming the same key would make selection ambiguous, so
    /// the build refuses the dataset instead of silently picking one.
    pub fn build(dataset: &RaceDataset) -> Result<Self, FinishlineError> {
        let mut groups = HashMap::new();
        for (position, group) in dataset.results.iter().enumerate() {
            let distance = group.grouping.distance.clone();
            let key = if group.grouping.overall {
                CategoryKey::Overall
            } else {
                CategoryKey::Named(group.grouping.category.clone().unwrap_or_default())
            };
            if groups
                .insert((distance.clone(), key.clone()), position)
                .is_some()
            {
                return Err(FinishlineError::DuplicateGroupError {
                    distance,
                    category: match key {
                        CategoryKey::Overall => OVERALL_CATEGORY.to_string(),
                        CategoryKey::Named(name) => name,
                    },
                });
            }
        }

        let distances = dataset
            .results
            .iter()
            .map(|group| group.grouping.distance.clone())
            .unique()
            .sorted_by(|a, b| compare_distances(a, b))
            .collect();

        let mut categories = vec![OVERALL_CATEGORY.to_string()];
        categories.extend(
            dataset
                .results
                .iter()
                .filter_map(|group| group.grouping.category.clone())
                .filter(|category| !category.is_empty() && category != OVERALL_CATEGORY)
                .unique()
                .sorted(),
        );

        Ok(Self {
            groups,
            distances,
            categories,
        })
    }

    /// Position of the group for a selection key within the dataset's
    /// Results sequence, if one exists.
    pub fn lookup(&self, distance: &str, category: &CategoryKey) -> Option<usize> {
        self.groups
            .get(&(distance.to_string(), category.clone()))
            .copied()
    }

    /// Distinct distances in the export, sorted ascending.
    pub fn distances(&self) -> &[String] {
        &self.distances
    }

    /// Distinct categories with the overall pseudo-category first. The
    /// literal name "Overall" is reserved for the pseudo-category: a group
    /// exported under it can never be selected, so it is not listed.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Orders distances by their leading numeric value so "5K" sorts before
/// "10K"; names without one sort after, lexicographically. Ties on the
/// numeric value fall back to the full name.
fn compare_distances(a: &str, b: &str) -> Ordering {
    match (numeric_prefix(a), numeric_prefix(b)) {
        (Some(left), Some(right)) => left.total_cmp(&right).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn numeric_prefix(value: &str) -> Option<f64> {
    let digits: String = value
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}
