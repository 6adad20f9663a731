use crate::catalog::model::Activity;
use std::collections::HashSet;

/// Ids of the activities the signed-in user saved.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SavedActivities {
    ids: HashSet<String>,
}

impl SavedActivities {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, activity_id: &str) -> bool {
        self.ids.contains(activity_id)
    }

    /// Mirrors a toggle answered by the backend.
    pub fn set(&mut self, activity_id: &str, saved: bool) {
        if saved {
            self.ids.insert(activity_id.to_string());
        } else {
            self.ids.remove(activity_id);
        }
    }

    /// `None` for activities without an id, which cannot be saved.
    pub fn saved_state(&self, activity: &Activity) -> Option<bool> {
        activity.id.as_deref().map(|id| self.contains(id))
    }

    pub fn decorate<'a>(&self, activities: Vec<&'a Activity>) -> Vec<Listing<'a>> {
        activities
            .into_iter()
            .map(|activity| Listing {
                activity,
                saved: self.saved_state(activity),
            })
            .collect()
    }
}

/// An activity as shown in the results, with the state of its heart button.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Listing<'a> {
    pub activity: &'a Activity,
    pub saved: Option<bool>,
}
