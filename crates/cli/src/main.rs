use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{load_from_file, CandidateRecord};
use pipeline::{AggregationResult, CandidateBoard, ColumnFilters, SortDirection, SortKey};
use std::path::PathBuf;
use std::time::Instant;

/// Candidate Tracker - search, filter and chart candidate records
#[derive(Parser)]
#[command(name = "candidate-tracker")]
#[command(about = "Query and analytics over a candidate collection", long_about = None)]
struct Cli {
    /// Path to the JSON array of candidates
    #[arg(short, long, default_value = "data/candidates.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the candidate table
    List {
        /// Free-text search across name, skills, location and experience
        #[arg(long)]
        search: Option<String>,

        /// First or last name contains (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Has this exact skill (case-insensitive)
        #[arg(long)]
        skills: Option<String>,

        /// Location contains (case-insensitive)
        #[arg(long)]
        location: Option<String>,

        /// Experience value contains this text
        #[arg(long)]
        experience: Option<String>,

        /// Sort request on a column; repeat to issue several requests in order.
        /// Each request flips the sort direction.
        #[arg(long = "sort")]
        sort: Vec<SortKey>,

        /// Print the rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the dashboard distributions
    Analytics {
        /// Print chart data as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single candidate
    Profile {
        /// Candidate id
        #[arg(long)]
        id: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let raw = load_from_file(&cli.data_file).with_context(|| {
        format!("Failed to load candidates from {}", cli.data_file.display())
    })?;
    tracing::debug!("Loaded {} candidates in {:?}", raw.len(), start.elapsed());

    let mut board = CandidateBoard::with_records(raw);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            search,
            name,
            skills,
            location,
            experience,
            sort,
            json,
        } => {
            board.set_search_term(search.unwrap_or_default());
            board.set_filters(ColumnFilters {
                name: name.unwrap_or_default(),
                skills: skills.unwrap_or_default(),
                location: location.unwrap_or_default(),
                experience: experience.unwrap_or_default(),
            });
            for key in sort {
                board.request_sort(key);
            }
            handle_list(&board, json)?
        }
        Commands::Analytics { json } => handle_analytics(&board, json)?,
        Commands::Profile { id } => handle_profile(&board, &id)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(board: &CandidateBoard, json: bool) -> Result<()> {
    let rows = board.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut header = format!("Candidates ({} of {})", rows.len(), board.records().len());
    if board.is_any_filter_applied() {
        header.push_str(" - filters applied");
    }
    println!("{}", header.bold().blue());

    let sort = board.params().sort;
    let arrow = |key: SortKey| match sort.key {
        Some(active) if active == key => match sort.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        },
        _ => "▲▼",
    };
    println!(
        "{:<28} {:<30} {:<14} {}",
        format!("Full Name {}", arrow(SortKey::FirstName)).bold(),
        format!("Skills {}", arrow(SortKey::Skills)).bold(),
        format!("Experience {}", arrow(SortKey::YearsOfExperience)).bold(),
        format!("Location {}", arrow(SortKey::Location)).bold(),
    );

    for record in &rows {
        println!(
            "{:<28} {:<30} {:<14} {}",
            record.full_name(),
            record.skills_display(),
            format!("{} years", record.years_of_experience),
            record.location
        );
    }
    Ok(())
}

/// Handle the 'analytics' command
fn handle_analytics(board: &CandidateBoard, json: bool) -> Result<()> {
    let result = board.analytics();

    if json {
        println!("{}", serde_json::to_string_pretty(&result.chart_data())?);
        return Ok(());
    }

    print_analytics(&result);
    Ok(())
}

/// Handle the 'profile' command
fn handle_profile(board: &CandidateBoard, id: &str) -> Result<()> {
    let record = board
        .profile(id)
        .ok_or_else(|| anyhow!("Candidate {} not found", id))?;

    print_profile(&record);
    Ok(())
}

fn print_analytics(result: &AggregationResult) {
    let charts = result.chart_data();

    println!("{}", "Video Interview Results".bold().blue());
    for point in &charts.video_interview_results {
        println!("{}{}: {}", "• ".green(), point.name, point.value);
    }

    println!("{}", "Passed and Failed Candidates".bold().blue());
    for bar in &charts.pass_fail_by_stage {
        println!(
            "{}{}: video interview {}, coding test {}",
            "• ".green(),
            bar.name,
            bar.video_interview,
            bar.coding_test
        );
    }

    let sections = [
        ("Skills Distribution", &charts.skills),
        ("Years of Experience Distribution", &charts.years_of_experience),
        ("Location-based Candidate Distribution", &charts.locations),
    ];
    for (title, points) in sections {
        println!("{}", title.bold().blue());
        if points.is_empty() {
            println!("  (no data)");
        }
        for point in points {
            println!("{}{}: {}", "• ".cyan(), point.name, point.value);
        }
    }
}

fn print_profile(record: &CandidateRecord) {
    println!("{}", record.full_name().bold().blue());
    println!("{}Id: {}", "• ".green(), record.id);
    println!("{}Skills: {}", "• ".green(), record.skills.join(", "));
    println!("{}Experience: {} years", "• ".green(), record.years_of_experience);
    println!("{}Location: {}", "• ".green(), record.location);
    println!("{}Coding result: {}", "• ".cyan(), record.coding_result);
    println!(
        "{}Video interview result: {}",
        "• ".cyan(),
        record.video_interview_result
    );
}
