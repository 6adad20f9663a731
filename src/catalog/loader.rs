use super::layout;
use super::model::{Activity, CatalogKind};
use super::source::{RowSource, Rows};
use crate::schedule::{ParsePolicy, ScheduleParser};
use chrono::NaiveDate;
use tracing::{debug, error, info};

pub struct CatalogLoader<S> {
    pub source: S,
    pub parser: ScheduleParser,
}

impl<S: RowSource> CatalogLoader<S> {
    pub fn new(source: S, parser: ScheduleParser) -> Self {
        Self { source, parser }
    }

    /**
    Returns events followed by exhibitions, in sheet order.
    A tab that fails to load contributes no activities.
    */
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, today: NaiveDate) -> Vec<Activity> {
        let (events, exhibitions) = futures::join!(
            self.fetch(CatalogKind::Events),
            self.fetch(CatalogKind::Exhibitions)
        );

        let mut activities = self.process_rows(&events, CatalogKind::Events, today);
        activities.append(&mut self.process_rows(
            &exhibitions,
            CatalogKind::Exhibitions,
            today,
        ));

        info!("Loaded {} activities", activities.len());

        activities
    }

    async fn fetch(&self, kind: CatalogKind) -> Rows {
        self.source.fetch_rows(kind).await.unwrap_or_else(|err| {
            error!("Failed to fetch '{}': {}", kind.sheet_name(), err);
            Rows::new()
        })
    }

    pub fn process_rows(
        &self,
        rows: &[Vec<String>],
        kind: CatalogKind,
        today: NaiveDate,
    ) -> Vec<Activity> {
        let activities: Vec<Activity> = rows
            .iter()
            .skip(1)
            .filter_map(|row| self.to_activity(row, kind, today))
            .collect();

        debug!(
            "'{}': accepted {} of {} rows",
            kind.sheet_name(),
            activities.len(),
            rows.len().saturating_sub(1)
        );

        activities
    }

    fn to_activity(
        &self,
        row: &[String],
        kind: CatalogKind,
        today: NaiveDate,
    ) -> Option<Activity> {
        if row.len() < layout::MIN_COLUMNS
            || cell(row, layout::INCLUDE) != layout::INCLUDE_MARKER
        {
            return None;
        }

        let title = cell(row, layout::TITLE);

        if title.is_empty() {
            debug!("Skipping included row without a title");
            return None;
        }

        let is_exhibition = kind == CatalogKind::Exhibitions;
        let policy = if is_exhibition {
            ParsePolicy::WideOpen
        } else {
            ParsePolicy::Ordinary
        };
        let schedule_text = cell(row, layout::SCHEDULE);

        Some(Activity {
            id: non_empty(cell(row, layout::ID)),
            title: title.to_string(),
            schedule_text: schedule_text.to_string(),
            occurrence_dates: self.parser.dates(schedule_text, today, policy),
            venue: cell(row, layout::VENUE).to_string(),
            cost: non_empty(cell(row, layout::COST))
                .filter(|cost| !cost.eq_ignore_ascii_case(layout::NOT_AVAILABLE)),
            link_url: cell(row, layout::URL).to_string(),
            photo_ref: non_empty(
                cell(row, layout::PHOTO)
                    .strip_prefix(layout::PHOTO_SIGIL)
                    .unwrap_or(cell(row, layout::PHOTO)),
            ),
            categories: if is_exhibition {
                Vec::new()
            } else {
                split_list(cell(row, layout::CATEGORIES))
            },
            areas: split_list(cell(row, layout::AREAS)),
            is_exhibition,
        })
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|value| value.trim()).unwrap_or_default()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(layout::LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
