use super::model::{ALL_LABEL, EXHIBITION_LABEL};
use crate::catalog::model::Activity;
use std::collections::BTreeSet;

/// Values offered by the category and area dropdowns.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Facets {
    pub categories: BTreeSet<String>,
    pub areas: BTreeSet<String>,
}

pub fn build_facets(catalog: &[Activity]) -> Facets {
    let mut categories = BTreeSet::from([ALL_LABEL.to_string(), EXHIBITION_LABEL.to_string()]);
    let mut areas = BTreeSet::from([ALL_LABEL.to_string()]);

    for activity in catalog {
        if !activity.is_exhibition {
            categories.extend(activity.categories.iter().cloned());
        }

        areas.extend(activity.areas.iter().cloned());
    }

    Facets { categories, areas }
}
