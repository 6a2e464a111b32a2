mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use lectern::catalog::{CourseOverview, Listing};
use lectern::providers::config::ProviderConfig;
use lectern::providers::http::HttpProvider;
use lectern::Lectern;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lectern=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ProviderConfig::resolve(cli.config.as_deref())?;
    let provider = Arc::new(HttpProvider::new(&config)?);
    let lectern = Lectern::with_memory_store(provider);

    match cli.command {
        Commands::Courses { keyword, archive } => {
            let browser = if archive { lectern.archive_browser() } else { lectern.catalog_browser() };
            let snapshot = match keyword {
                Some(keyword) => {
                    browser.load().await;
                    browser.search(&keyword).await
                }
                None => browser.load().await,
            };

            if let Some(message) = &snapshot.error {
                eprintln!("Error: {message} (re-run to retry)");
                std::process::exit(1);
            }
            if snapshot.is_empty_result() {
                println!("No courses match \"{}\".", snapshot.keyword);
                return Ok(());
            }

            let listing = Listing::for_status(browser.status());
            for course in &snapshot.courses {
                let card = CourseOverview::of(course, listing);
                println!(
                    "{}  {}  [{} lessons, {}]  {}",
                    card.id, card.title, card.lesson_count, card.duration, card.price
                );
            }
        }
        Commands::Show { course_id } => {
            let session = lectern.open_course(Some(&course_id)).await?;
            let card = session.overview();
            println!("{}: {} lessons, {}, {}", card.title, card.lesson_count, card.duration, card.price);
            for section in &session.course().sections {
                let marker = if session.navigation().is_expanded(&section.id) { "-" } else { "+" };
                let duration = session.section_duration(&section.id).unwrap_or_default();
                println!("{marker} {}  ({duration})", section.title);
                for lesson in &section.lessons {
                    let active = if session.navigation().active_lesson() == Some(lesson.id.as_str()) {
                        "*"
                    } else {
                        " "
                    };
                    println!("  {active} [{:?}] {}  {}", lesson.kind, lesson.id, lesson.title);
                }
            }
        }
        Commands::Play { course_id, lesson_id } => {
            let mut session = lectern.open_course(Some(&course_id)).await?;
            if !session.select_lesson(&lesson_id) {
                eprintln!("Lesson {lesson_id} is not part of course {course_id}.");
                std::process::exit(1);
            }
            match session.video_embed_url().await? {
                Some(url) => println!("{url}"),
                None => println!("No video for lesson {lesson_id}."),
            }
        }
    }

    Ok(())
}
