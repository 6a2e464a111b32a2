use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Course catalog CLI for debugging and development
#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Browse and consume courses from a collaborator catalog", long_about = None)]
pub struct Cli {
    /// Provider config file (defaults to ./lectern.toml, then LECTERN_* env)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List or search the course catalog
    Courses {
        /// Keyword to search for
        keyword: Option<String>,
        /// Browse retired courses instead of the active catalog
        #[arg(long)]
        archive: bool,
    },
    /// Show a course outline with durations
    Show {
        /// Course id
        course_id: String,
    },
    /// Resolve the embed URL for a lesson's video
    Play {
        /// Course id
        course_id: String,
        /// Lesson id
        lesson_id: String,
    },
}
