use super::model::{DateFilter, FilterState, Selection, EXHIBITION_LABEL};
use crate::catalog::model::Activity;

/// Activities passing every selected filter, in catalog order.
pub fn apply<'a>(catalog: &'a [Activity], state: &FilterState) -> Vec<&'a Activity> {
    let search_text = state.search_text.to_lowercase();

    catalog
        .iter()
        .filter(|activity| matches_search(activity, &search_text))
        .filter(|activity| matches_category(activity, &state.category))
        .filter(|activity| matches_date(activity, &state.date))
        .filter(|activity| matches_area(activity, &state.area))
        .collect()
}

fn matches_search(activity: &Activity, search_text: &str) -> bool {
    search_text.is_empty()
        || activity.title.to_lowercase().contains(search_text)
        || activity.venue.to_lowercase().contains(search_text)
}

fn matches_category(activity: &Activity, category: &Selection) -> bool {
    match category {
        Selection::All => true,
        Selection::Only(label) if label == EXHIBITION_LABEL => activity.is_exhibition,
        Selection::Only(label) => !activity.is_exhibition && activity.categories.contains(label),
    }
}

fn matches_date(activity: &Activity, date: &DateFilter) -> bool {
    match *date {
        DateFilter::All => true,
        DateFilter::On(day) => activity.occurs_on(day),
        DateFilter::Within { start, end } => activity.occurs_within(start, end),
    }
}

fn matches_area(activity: &Activity, area: &Selection) -> bool {
    match area {
        Selection::All => true,
        Selection::Only(label) => activity.areas.contains(label),
    }
}
