use super::loader::CatalogLoader;
use super::model::Activity;
use super::source::RowSource;
use crate::filter::engine::apply;
use crate::filter::facets::{build_facets, Facets};
use crate::filter::model::FilterState;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Issued when a load starts; only the newest ticket's catalog is kept.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct LoadTicket(u64);

/// Holds the catalog currently on screen.
///
/// Loads may overlap (a reload while the first one is still in flight), so
/// each one takes a ticket and a response is only installed when no newer
/// response has been installed before it.
#[derive(Debug, Default)]
pub struct CatalogSession {
    catalog: Vec<Activity>,
    issued: u64,
    applied: u64,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &[Activity] {
        &self.catalog
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;

        LoadTicket(self.issued)
    }

    /// Returns whether the catalog was installed.
    pub fn complete_load(&mut self, ticket: LoadTicket, catalog: Vec<Activity>) -> bool {
        if ticket.0 <= self.applied {
            warn!(
                "Discarding stale load #{} (#{} already applied)",
                ticket.0, self.applied
            );
            return false;
        }

        debug!("Installing load #{} with {} activities", ticket.0, catalog.len());

        self.applied = ticket.0;
        self.catalog = catalog;

        true
    }

    pub async fn reload<S: RowSource>(
        &mut self,
        loader: &CatalogLoader<S>,
        today: NaiveDate,
    ) -> bool {
        let ticket = self.begin_load();
        let catalog = loader.load(today).await;

        self.complete_load(ticket, catalog)
    }

    pub fn visible(&self, state: &FilterState) -> Vec<&Activity> {
        apply(&self.catalog, state)
    }

    pub fn facets(&self) -> Facets {
        build_facets(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::CatalogKind;
    use crate::catalog::source::StaticRows;
    use crate::schedule::ScheduleParser;

    fn activity(title: &str) -> Activity {
        Activity {
            id: None,
            title: title.to_string(),
            schedule_text: String::new(),
            occurrence_dates: Default::default(),
            venue: String::new(),
            cost: None,
            link_url: String::new(),
            photo_ref: None,
            categories: vec![],
            areas: vec![],
            is_exhibition: false,
        }
    }

    #[test_log::test]
    fn when_an_older_load_finishes_last_should_keep_the_newer_catalog() {
        let mut session = CatalogSession::new();

        let first = session.begin_load();
        let second = session.begin_load();

        assert!(session.complete_load(second, vec![activity("fresh")]));
        assert!(!session.complete_load(first, vec![activity("stale")]));

        assert_eq!(session.catalog()[0].title, "fresh");
    }

    #[test_log::test]
    fn when_loads_finish_in_order_should_install_each() {
        let mut session = CatalogSession::new();

        let first = session.begin_load();
        let second = session.begin_load();

        assert!(session.complete_load(first, vec![activity("first")]));
        assert!(session.complete_load(second, vec![activity("second")]));

        assert_eq!(session.catalog()[0].title, "second");
        assert!(!session.complete_load(second, vec![]));
    }

    #[test_log::test(tokio::test)]
    async fn reload_should_replace_the_catalog() {
        let header = vec!["Include".to_string(); 7];
        let row: Vec<String> = ["Y", "", "Lantern Walk", "Festival", "", "", "1/12"]
            .iter()
            .map(|cell| cell.to_string())
            .collect();
        let loader = CatalogLoader::new(
            StaticRows::new().with(CatalogKind::Events, vec![header, row]),
            ScheduleParser::for_year(2026),
        );
        let mut session = CatalogSession::new();

        assert!(
            session
                .reload(&loader, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap())
                .await
        );

        assert_eq!(session.catalog().len(), 1);
        assert_eq!(session.visible(&FilterState::default()).len(), 1);
        assert!(session.facets().categories.contains("Festival"));
    }
}
