use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use itertools::Itertools;
use std::error::Error;
use tracing::{info, warn};
use xplore::catalog::loader::CatalogLoader;
use xplore::catalog::session::CatalogSession;
use xplore::catalog::sheets::GoogleSheetsAPI;
use xplore::config::env_loader::load_config;
use xplore::config::model::FavoritesConfig;
use xplore::favorites::api::FavoritesAPI;
use xplore::favorites::model::{Listing, SavedActivities};
use xplore::filter::model::{DateFilter, FilterState, Selection};
use xplore::filter::quick::{week_window, QuickDate};
use xplore::filter::weekly::WeeklyDigest;
use xplore::logging::setup_logging;
use xplore::schedule::ScheduleParser;

/// Lists the events and exhibitions of XPLORE.
#[derive(Parser, Debug)]
#[command(name = "xplore")]
struct Args {
    /// Only activities happening on this day (YYYY-MM-DD)
    #[arg(long, conflicts_with = "when")]
    date: Option<NaiveDate>,

    /// all, today or weekend
    #[arg(long, default_value = "all")]
    when: QuickDate,

    #[arg(long, default_value = "all")]
    category: Selection,

    #[arg(long, default_value = "all")]
    area: Selection,

    /// Matched against titles and venues
    #[arg(long, default_value = "")]
    search: String,

    /// Print this week's post instead of the listing
    #[arg(long)]
    weekly: bool,

    /// Print the available categories and areas
    #[arg(long)]
    facets: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let loki = setup_logging().await;
    let config = load_config()?;

    let today = Local::now().date_naive();
    let parser = ScheduleParser::new(
        config.schedule_config.year_hint.unwrap_or(today.year()),
        config.schedule_config.till_rollover,
    );
    let sheets = &config.sheets_config;
    let loader = CatalogLoader::new(
        GoogleSheetsAPI::new(
            &sheets.base_url,
            &sheets.spreadsheet_id,
            &sheets.api_key,
            sheets.max_retries,
        ),
        parser,
    );

    let mut session = CatalogSession::new();
    session.reload(&loader, today).await;

    if args.facets {
        let facets = session.facets();

        println!("Categories: {}", facets.categories.iter().join(", "));
        println!("Areas: {}", facets.areas.iter().join(", "));
    }

    if args.weekly {
        let (start, end) = week_window(today);

        println!("{}", WeeklyDigest::build(session.catalog(), start, end).render());
    } else {
        let state = FilterState {
            date: args.date.map(DateFilter::On).unwrap_or(args.when.to_filter(today)),
            category: args.category,
            area: args.area,
            search_text: args.search,
        };
        let saved = load_saved_activities(config.favorites_config.as_ref()).await;
        let listings = saved.decorate(session.visible(&state));

        info!("Showing {} activities", listings.len());

        listings.iter().for_each(print_listing);
    }

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        handle.await?;
    }

    Ok(())
}

async fn load_saved_activities(favorites_config: Option<&FavoritesConfig>) -> SavedActivities {
    let Some(favorites_config) = favorites_config.filter(|config| config.token.is_some()) else {
        return SavedActivities::default();
    };

    FavoritesAPI::new(&favorites_config.backend_url, favorites_config.token.clone())
        .saved_activities()
        .await
        .unwrap_or_else(|err| {
            warn!("Couldn't get saved activities: {}", err);
            SavedActivities::default()
        })
}

fn print_listing(listing: &Listing) {
    let activity = listing.activity;
    let heart = match listing.saved {
        Some(true) => "♥",
        Some(false) => "♡",
        None => " ",
    };

    println!("{} {}", heart, activity.title);
    println!("    {}", activity.schedule_text);

    if !activity.venue.is_empty() {
        println!("    {}", activity.venue);
    }

    if let Some(cost) = &activity.cost {
        println!("    {}", cost);
    }

    if !activity.link_url.is_empty() {
        println!("    {}", activity.link_url);
    }
}
