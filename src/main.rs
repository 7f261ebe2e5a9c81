use std::path::PathBuf;

use clap::{Parser, Subcommand};
use finishline::FinishlineError;
use finishline::query::{Leaderboard, OVERALL_CATEGORY};
use finishline::results::load_results_file;
use finishline::ui::table;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the leaderboard for one distance and category
    Show {
        #[arg(short, long)]
        input: PathBuf,

        /// Distance to display, defaults to the first in the export
        #[arg(short, long)]
        distance: Option<String>,

        /// Category to display, defaults to Overall
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List the distances and categories available in an export
    Groups {
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn open_leaderboard(input: &PathBuf) -> Result<Leaderboard, FinishlineError> {
    if !input.exists() {
        return Err(FinishlineError::InvalidResultsFile {
            path: format!("{:?}", input),
        });
    }
    let dataset = load_results_file(input)?;
    Leaderboard::new(dataset)
}

fn show(
    input: &PathBuf,
    distance: Option<String>,
    category: Option<String>,
) -> Result<(), FinishlineError> {
    let leaderboard = open_leaderboard(input)?;
    let distance = distance
        .or_else(|| leaderboard.distances().first().cloned())
        .unwrap_or_default();
    let category = category.unwrap_or_else(|| OVERALL_CATEGORY.to_string());

    let rows = leaderboard.rows(&distance, &category);
    print!("{}", table::render_header(leaderboard.race_info()));
    println!("{} • {}", distance, category);
    print!("{}", table::render_table(leaderboard.columns(), &rows));
    Ok(())
}

fn groups(input: &PathBuf) -> Result<(), FinishlineError> {
    let leaderboard = open_leaderboard(input)?;
    println!("Distances: {}", leaderboard.distances().join(", "));
    println!("Categories: {}", leaderboard.categories().join(", "));
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    match &cli.command {
        Commands::Show {
            input,
            distance,
            category,
        } => {
            show(input, distance.clone(), category.clone())
                .expect("Error while rendering leaderboard");
        }
        Commands::Groups { input } => {
            groups(input).expect("Error while listing result groups");
        }
    };
}
