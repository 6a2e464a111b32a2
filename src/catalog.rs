//! View-data derivation over a course snapshot. Everything here is pure and
//! total: absent optional fields fall back to documented defaults.

use serde::Serialize;
use url::Url;

use crate::model::{Course, CourseStatus, Lesson, Thumbnail};

/// Placeholder shown for courses without an uploaded thumbnail.
pub const COURSE_PLACEHOLDER: &str = "https://placehold.co/600x400?text=Course";
/// Placeholder variant for the archive listing.
pub const ARCHIVE_PLACEHOLDER: &str = "https://placehold.co/600x400?text=Archive";

/// Listing context a course is rendered in. Archive listings force the
/// "Free" price label regardless of the stored price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Catalog,
    Archive,
}

impl Listing {
    /// Archive browsing is the `Inactive`-status listing; anything else is
    /// the regular catalog.
    pub fn for_status(status: Option<CourseStatus>) -> Self {
        match status {
            Some(CourseStatus::Inactive) => Listing::Archive,
            _ => Listing::Catalog,
        }
    }
}

/// Total number of lessons across all sections.
pub fn lesson_count(course: &Course) -> usize {
    course.sections.iter().map(|s| s.lessons.len()).sum()
}

/// Sum the video durations of a lesson sequence and format the total.
pub fn total_duration(lessons: &[Lesson]) -> String {
    format_duration(lessons.iter().map(|l| l.video_duration).sum())
}

/// `"{h}h {m}m"` once there is a full hour, `"{m}m {s}s"` below it, `"0m"`
/// for nothing at all.
pub fn format_duration(total_secs: u64) -> String {
    if total_secs == 0 {
        return "0m".to_string();
    }
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m {}s", minutes, total_secs % 60)
    }
}

/// Resolve a thumbnail field to a displayable URL, falling back to the
/// listing-tagged placeholder.
pub fn resolve_thumbnail(thumbnail: Option<&Thumbnail>, listing: Listing) -> String {
    match thumbnail {
        Some(t) => t.url().to_string(),
        None => match listing {
            Listing::Catalog => COURSE_PLACEHOLDER.to_string(),
            Listing::Archive => ARCHIVE_PLACEHOLDER.to_string(),
        },
    }
}

/// `"Free"` for zero-priced courses and for anything shown in the archive;
/// otherwise the stored price with a currency prefix.
pub fn price_label(course: &Course, listing: Listing) -> String {
    if listing == Listing::Archive || course.price == 0.0 {
        "Free".to_string()
    } else {
        format!("${}", course.price)
    }
}

/// Human-readable last-updated label for listing cards.
pub fn updated_label(course: &Course) -> Option<String> {
    course.updated_at.map(|t| t.format("%b %-d, %Y").to_string())
}

/// Prefix a transport scheme onto asset URLs that were stored without one.
/// Scheme-relative URLs keep their host part.
pub fn normalize_asset_url(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("//") {
        return format!("https://{}", rest);
    }
    match Url::parse(raw) {
        Ok(_) => raw.to_string(),
        Err(_) => format!("https://{}", raw),
    }
}

/// Card-ready projection of a course for listing views.
#[derive(Debug, Clone, Serialize)]
pub struct CourseOverview {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub status: CourseStatus,
    pub lesson_count: usize,
    pub duration: String,
    pub price: String,
    pub thumbnail_url: String,
    pub rating: Option<f64>,
    pub enrolled_count: u64,
    pub updated: Option<String>,
}

impl CourseOverview {
    pub fn of(course: &Course, listing: Listing) -> Self {
        let total: u64 = course.lessons().map(|l| l.video_duration).sum();
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
            category: course.category.clone(),
            status: course.status,
            lesson_count: lesson_count(course),
            duration: format_duration(total),
            price: price_label(course, listing),
            thumbnail_url: resolve_thumbnail(course.thumbnail.as_ref(), listing),
            rating: course.rating,
            enrolled_count: course.enrolled_count,
            updated: updated_label(course),
        }
    }
}
