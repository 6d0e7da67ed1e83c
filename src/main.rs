use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feelio::analytics;
use feelio::db::{Database, Table};
use feelio::export::{self, NoShare};
use feelio::models::{CreatedAt, DiaryEntry, Mood, NewEntry, UpdateEntry, WeatherReport};
use feelio::reminder::ReminderSettings;

#[derive(Parser)]
#[command(name = "feelio")]
#[command(about = "Local-first journal with mood tracking and weather capture")]
struct Cli {
    /// Database file to use instead of the platform data directory
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a new entry
    Add {
        title: String,
        content: String,
        /// Mood: terrible, bad, okay, good or great
        #[arg(short, long)]
        mood: Option<String>,
        /// Weather report JSON from the lookup service, stored as-is
        #[arg(long)]
        weather: Option<String>,
        /// Attached image URI; repeat for more, the first is the thumbnail
        #[arg(short, long = "image")]
        images: Vec<String>,
    },
    /// Show one entry
    Show { id: i64 },
    /// Rewrite an entry's title, content, mood and images
    Edit {
        id: i64,
        title: String,
        content: String,
        /// Mood: terrible, bad, okay, good or great
        #[arg(short, long)]
        mood: Option<String>,
        /// Attached image URI; repeat for more
        #[arg(short, long = "image")]
        images: Vec<String>,
    },
    /// Delete an entry
    Delete { id: i64 },
    /// List the entries of one month
    List {
        year: i32,
        /// Full month name, e.g. "March"
        month: String,
    },
    /// Search titles and content for a substring
    Search { query: String },
    /// Writing streak, weekly entry count and mood series
    Stats,
    /// Export every entry to a JSON backup file
    Export {
        /// Directory for the backup file
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Show or change the daily reminder
    Remind {
        #[command(subcommand)]
        action: Option<RemindAction>,
    },
    /// Delete every entry
    Clear {
        /// Confirm that losing all entries is intended
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum RemindAction {
    /// Enable the reminder at the given time
    Set { hour: u8, minute: u8 },
    /// Turn the reminder on at its saved time
    On,
    /// Turn the reminder off, keeping the time
    Off,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "feelio=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let db = match &cli.database {
        Some(path) => Database::open(path.clone())?,
        None => Database::open_default()?,
    };
    db.migrate()?;

    match cli.command {
        Commands::Add {
            title,
            content,
            mood,
            weather,
            images,
        } => {
            let mood = parse_mood(mood.as_deref())?;
            let weather = weather
                .as_deref()
                .map(serde_json::from_str::<WeatherReport>)
                .transpose()
                .context("--weather is not a valid weather report")?;

            let id = db.insert_entry(&NewEntry {
                title,
                content,
                created_at: CreatedAt::now(),
                mood,
                weather: weather.map(|report| report.snapshot()),
                images,
            })?;
            println!("Saved entry {id}");
        }

        Commands::Show { id } => match db.entry(id)? {
            Some(entry) => print_entry(&entry),
            None => println!("No entry with id {id}"),
        },

        Commands::Edit {
            id,
            title,
            content,
            mood,
            images,
        } => {
            let mood = parse_mood(mood.as_deref())?;
            let updated = db.update_entry(
                id,
                &UpdateEntry {
                    title,
                    content,
                    mood,
                    images,
                },
            )?;
            if updated {
                println!("Updated entry {id}");
            } else {
                println!("No entry with id {id}");
            }
        }

        Commands::Delete { id } => {
            db.delete_entry(id)?;
            println!("Deleted entry {id}");
        }

        Commands::List { year, month } => {
            let entries = db.entries_for_month(year, &month)?;
            if entries.is_empty() {
                println!("No entries for {month} {year}");
            } else {
                for entry in &entries {
                    print_summary(entry);
                }
            }
        }

        Commands::Search { query } => {
            let query = query.trim();
            // the store applies no minimum-length gate; that's on us
            if query.chars().count() < 2 {
                bail!("search needs at least two characters");
            }
            let entries = db.search(query)?;
            println!(
                "{} result{} for \"{query}\"",
                entries.len(),
                if entries.len() == 1 { "" } else { "s" }
            );
            for entry in &entries {
                print_summary(entry);
            }
        }

        Commands::Stats => {
            let now = Local::now();
            let today = now.date_naive();

            let streak_window = db.entries_since(
                now.timestamp() - i64::from(analytics::DEFAULT_STREAK_WINDOW) * 86_400,
            )?;
            let streak =
                analytics::writing_streak(&streak_window, today, analytics::DEFAULT_STREAK_WINDOW);

            let week = db.entries_since(now.timestamp() - 7 * 86_400)?;
            let series = analytics::weekly_mood_series(&week, today);

            println!("Day streak: {streak}");
            println!("This week:  {} entries", analytics::entries_in_window(&week));
            if series.has_data {
                println!("Mood this week:");
                for (label, value) in series.labels.iter().zip(series.values) {
                    match value {
                        0 => println!("  {label}  -"),
                        v => println!("  {label}  {} ({v}/5)", Mood::ALL[usize::from(v) - 1].marker()),
                    }
                }
            } else {
                println!("Mood this week: no mood entries yet");
            }
        }

        Commands::Export { dir } => {
            let summary = export::export_to_dir(&db, &dir, &NoShare)?;
            println!(
                "Exported {} entries to {}",
                summary.entry_count,
                summary.path.display()
            );
        }

        Commands::Remind { action } => {
            let path = ReminderSettings::default_path()?;
            let mut settings = ReminderSettings::load(&path)?;
            match action {
                None => {}
                Some(RemindAction::Set { hour, minute }) => {
                    if hour > 23 || minute > 59 {
                        bail!("reminder time must be a valid HH MM");
                    }
                    settings = ReminderSettings {
                        hour,
                        minute,
                        enabled: true,
                    };
                    settings.save(&path)?;
                }
                Some(RemindAction::On) => {
                    settings.enabled = true;
                    settings.save(&path)?;
                }
                Some(RemindAction::Off) => {
                    settings.enabled = false;
                    settings.save(&path)?;
                }
            }
            println!(
                "Daily reminder: {} at {:02}:{:02}",
                if settings.enabled { "on" } else { "off" },
                settings.hour,
                settings.minute
            );
        }

        Commands::Clear { force } => {
            if !force {
                bail!("this deletes every entry; pass --force if that is what you want");
            }
            db.clear(Table::Diary)?;
            println!("All entries deleted");
        }
    }

    Ok(())
}

fn parse_mood(label: Option<&str>) -> Result<Option<Mood>> {
    match label {
        None => Ok(None),
        Some(raw) => Mood::from_label(raw)
            .map(Some)
            .with_context(|| format!("unknown mood '{raw}' (terrible, bad, okay, good or great)")),
    }
}

fn print_summary(entry: &DiaryEntry) {
    let at = &entry.created_at;
    let mood = entry.mood.map(|m| m.marker()).unwrap_or(" ");
    println!(
        "{:>4}  {} {:>2} {}  {:02}:{:02}  {}  {}",
        entry.id, at.month_name, at.day, at.year, at.hour, at.minute, mood, entry.title
    );
}

fn print_entry(entry: &DiaryEntry) {
    let at = &entry.created_at;
    println!("#{}  {}", entry.id, entry.title);
    println!(
        "written {} {}, {} at {:02}:{:02}",
        at.month_name, at.day, at.year, at.hour, at.minute
    );
    if let Some(mood) = entry.mood {
        println!("mood    {} {}", mood.marker(), mood.label());
    }
    if let Some(weather) = &entry.weather {
        println!("weather {}°C in {}", weather.temperature_c, weather.city);
    }
    if entry.tags.is_some() {
        println!("tags    {}", entry.tag_list().join(", "));
    }
    if !entry.images.is_empty() {
        println!("images  {}", entry.images.join(", "));
    }
    println!();
    println!("{}", entry.content);
}
