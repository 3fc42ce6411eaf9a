use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Subcommand;
use pulpit_core::catalog::{filter_by_category, fixtures, search, time_ago};
use pulpit_core::{
    newest_first, CategoryFilter, Config, DailyView, DeclarationCategory, ListingStats,
    PropheticDeclaration, ResetScheduler, Snapshot, SystemClock, ValidationError,
};
use serde::Serialize;

#[derive(Subcommand)]
pub enum DeclarationsAction {
    /// Today's declarations, most recent first
    List {
        /// Category label, or "All"
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive text to find in title or content
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        json: bool,
    },
    /// Count, views and distinct categories of today's listing
    Stats {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Keep the list live, re-sorting when the day rolls over (Ctrl-C to stop)
    Watch {
        /// Seconds between clock checks (defaults to scheduler.poll_interval_secs)
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

#[derive(Serialize)]
struct Row<'a> {
    #[serde(flatten)]
    declaration: &'a PropheticDeclaration,
    time_ago: String,
}

fn category_filter(
    category: Option<String>,
    config: &Config,
) -> Result<CategoryFilter, ValidationError> {
    let label = category.unwrap_or_else(|| config.catalog.default_declaration_category.clone());
    CategoryFilter::parse::<DeclarationCategory>(&label)
}

/// Category filter, then search, keeping the snapshot's order.
fn listing(
    snapshot: &Snapshot<PropheticDeclaration>,
    filter: &CategoryFilter,
    needle: &str,
) -> Vec<PropheticDeclaration> {
    search(&filter_by_category(&snapshot.entries, filter), needle)
}

fn print_snapshot(
    snapshot: &Snapshot<PropheticDeclaration>,
    filter: &CategoryFilter,
    needle: &str,
    now: DateTime<Utc>,
) {
    println!("Declarations as of {}", snapshot.last_reset_date);
    let shown = listing(snapshot, filter, needle);
    if shown.is_empty() {
        println!("No declarations found");
    }
    for d in &shown {
        println!(
            "{:>3}  {:<10} {:<22} {}",
            d.id,
            time_ago(d.timestamp, now),
            d.category.label(),
            d.title
        );
    }
}

pub fn run(action: DeclarationsAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let view = DailyView::new(fixtures::prophetic_declarations(now), newest_first, SystemClock);

    match action {
        DeclarationsAction::List {
            category,
            search,
            json,
        } => {
            let filter = category_filter(category, config)?;
            let snapshot = view.snapshot();

            if json {
                let shown = listing(&snapshot, &filter, &search);
                let rows: Vec<Row<'_>> = shown
                    .iter()
                    .map(|declaration| Row {
                        declaration,
                        time_ago: time_ago(declaration.timestamp, now),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_snapshot(&snapshot, &filter, &search, now);
            }
        }
        DeclarationsAction::Stats { category, search } => {
            let filter = category_filter(category, config)?;
            let shown = listing(&view.snapshot(), &filter, &search);
            let stats = ListingStats::from_entries(&shown);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        DeclarationsAction::Watch { interval_secs } => {
            let scheduler = match interval_secs {
                Some(secs) => ResetScheduler::new(Duration::from_secs(secs))?,
                None => ResetScheduler::from_config(&config.scheduler)?,
            };
            let filter = category_filter(None, config)?;

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async move {
                let (handle, mut reader) = scheduler.spawn(view);
                println!("{}", serde_json::to_string(handle.started_event())?);
                print_snapshot(&reader.latest(), &filter, "", Utc::now());

                let ctrl_c = tokio::signal::ctrl_c();
                tokio::pin!(ctrl_c);
                loop {
                    tokio::select! {
                        changed = reader.changed() => {
                            if !changed {
                                break;
                            }
                            print_snapshot(&reader.latest(), &filter, "", Utc::now());
                        }
                        _ = &mut ctrl_c => break,
                    }
                }

                if let Some(event) = handle.stop().await {
                    println!("{}", serde_json::to_string(&event)?);
                }
                Ok::<(), Box<dyn std::error::Error>>(())
            })?;
        }
    }
    Ok(())
}
