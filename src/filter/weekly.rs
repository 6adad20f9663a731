use super::model::EXHIBITION_LABEL;
use crate::catalog::model::Activity;
use chrono::{Datelike, NaiveDate};
use itertools::Itertools;

/// Activities happening in a week, grouped by category in the order the
/// categories first appear in the catalog.
#[derive(Debug)]
pub struct WeeklyDigest<'a> {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub sections: Vec<(String, Vec<&'a Activity>)>,
}

impl<'a> WeeklyDigest<'a> {
    pub fn build(catalog: &'a [Activity], start: NaiveDate, end: NaiveDate) -> Self {
        let mut sections: Vec<(String, Vec<&'a Activity>)> = Vec::new();

        for activity in catalog.iter().filter(|a| a.occurs_within(start, end)) {
            let labels = if activity.is_exhibition {
                vec![EXHIBITION_LABEL]
            } else {
                activity.categories.iter().map(String::as_str).collect()
            };

            for label in labels {
                match sections.iter_mut().find(|(category, _)| category == label) {
                    Some((_, activities)) => activities.push(activity),
                    None => sections.push((label.to_string(), vec![activity])),
                }
            }
        }

        Self {
            start,
            end,
            sections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Text for the weekly social media post.
    pub fn render(&self) -> String {
        let header = format!(
            "［每週香港活動 - {}］",
            format_date_range(self.start, self.end)
        );
        let sections = self.sections.iter().map(|(category, activities)| {
            let titles = activities.iter().map(|a| a.title.as_str()).unique().join("\n");

            format!("{category}\n{titles}\n")
        });

        std::iter::once(format!("{header}\n")).chain(sections).join("\n")
    }
}

/// "5-11/10" within a month, "28/09-4/10" across months.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.month() == end.month() {
        format!("{}-{}/{:02}", start.day(), end.day(), start.month())
    } else {
        format!(
            "{}/{:02}-{}/{:02}",
            start.day(),
            start.month(),
            end.day(),
            end.month()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, day).unwrap()
    }

    fn activity(
        title: &str,
        categories: &[&str],
        days: &[NaiveDate],
        is_exhibition: bool,
    ) -> Activity {
        Activity {
            id: None,
            title: title.to_string(),
            schedule_text: String::new(),
            occurrence_dates: days.iter().copied().collect(),
            venue: String::new(),
            cost: None,
            link_url: String::new(),
            photo_ref: None,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            areas: vec![],
            is_exhibition,
        }
    }

    #[test_log::test]
    fn should_format_ranges_like_the_weekly_post() {
        assert_eq!(format_date_range(date(12, 10), date(18, 10)), "12-18/10");
        assert_eq!(format_date_range(date(28, 9), date(4, 10)), "28/09-4/10");
    }

    #[test_log::test]
    fn should_group_activities_of_the_week_by_first_seen_category() {
        let catalog = [
            activity("Jazz Night", &["Music"], &[date(14, 10)], false),
            activity("Night Market", &["Food", "Music"], &[date(17, 10)], false),
            activity("Last Week", &["Film"], &[date(5, 10)], false),
            activity("Ink Masters", &["Ignored"], &[date(12, 10), date(20, 10)], true),
        ];

        let digest = WeeklyDigest::build(&catalog, date(12, 10), date(18, 10));

        let sections: Vec<(&str, Vec<&str>)> = digest
            .sections
            .iter()
            .map(|(category, activities)| {
                (
                    category.as_str(),
                    activities.iter().map(|a| a.title.as_str()).collect(),
                )
            })
            .collect();

        assert_eq!(
            sections,
            vec![
                ("Music", vec!["Jazz Night", "Night Market"]),
                ("Food", vec!["Night Market"]),
                ("展覽", vec!["Ink Masters"]),
            ]
        );
    }

    #[test_log::test]
    fn should_render_the_weekly_post() {
        let catalog = [
            activity("Jazz Night", &["Music"], &[date(14, 10)], false),
            activity("Choir", &["Music"], &[date(15, 10)], false),
            activity("Dim Sum Tour", &["Food"], &[date(16, 10)], false),
        ];

        let rendered = WeeklyDigest::build(&catalog, date(12, 10), date(18, 10)).render();

        assert_eq!(
            rendered,
            "［每週香港活動 - 12-18/10］\n\nMusic\nJazz Night\nChoir\n\nFood\nDim Sum Tour\n"
        );
    }
}
