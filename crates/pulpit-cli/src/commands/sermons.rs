use clap::Subcommand;
use pulpit_core::catalog::{find_by_id, fixtures};
use pulpit_core::{
    CatalogStats, CategoryFilter, Config, Sermon, SermonCategory, SermonQuery, ValidationError,
};

#[derive(Subcommand)]
pub enum SermonsAction {
    /// List sermons, newest first
    List {
        /// Category label, or "All"
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive text to find in title or description
        #[arg(long, default_value = "")]
        search: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one sermon in full
    Show {
        id: u32,
        #[arg(long)]
        json: bool,
    },
    /// Count, views, categories and running time of a listing
    Stats {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// List the sermon categories
    Categories,
}

fn query(
    category: Option<String>,
    search: String,
    config: &Config,
) -> Result<SermonQuery, ValidationError> {
    let label = category.unwrap_or_else(|| config.catalog.default_sermon_category.clone());
    let filter = CategoryFilter::parse::<SermonCategory>(&label)?;
    Ok(SermonQuery::new(filter, search))
}

fn print_row(sermon: &Sermon) {
    println!(
        "{:>3}  {}  {:<18} {:>6}  {:>6} views  {}",
        sermon.id,
        sermon.date.format("%Y-%m-%d"),
        sermon.category.label(),
        sermon.duration,
        sermon.views,
        sermon.title
    );
}

pub fn run(action: SermonsAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let library = fixtures::sermons();

    match action {
        SermonsAction::List {
            category,
            search,
            json,
        } => {
            let sermons = query(category, search, config)?.apply(&library);
            if json {
                println!("{}", serde_json::to_string_pretty(&sermons)?);
            } else if sermons.is_empty() {
                println!("No sermons found");
            } else {
                for sermon in &sermons {
                    print_row(sermon);
                }
            }
        }
        SermonsAction::Show { id, json } => {
            let sermon = find_by_id(&library, id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(sermon)?);
            } else {
                println!("{}", sermon.title);
                println!(
                    "{} | {} | {} | {} views",
                    sermon.date.format("%B %d, %Y"),
                    sermon.category,
                    sermon.duration,
                    sermon.views
                );
                println!();
                println!("{}", sermon.description);
                println!();
                println!("video: {}", sermon.video_url);
                println!("audio: {}", sermon.audio_url);
            }
        }
        SermonsAction::Stats { category, search } => {
            let sermons = query(category, search, config)?.apply(&library);
            let stats = CatalogStats::from_entries(&sermons)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        SermonsAction::Categories => {
            println!("All");
            for category in SermonCategory::ALL {
                println!("{category}");
            }
        }
    }
    Ok(())
}
