use thiserror::Error;

/// Shown when a fetch fails without a usable collaborator message.
pub const GENERIC_FETCH_MESSAGE: &str = "failed to load courses";

/// A single fetch attempt against the collaborator. Every variant is
/// terminal for that attempt and recoverable only by retrying.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Error payload reported by the collaborator.
    #[error("{0}")]
    Api(String),
    /// Non-success response without a usable error payload.
    #[error("failed to load courses")]
    Status(u16),
    /// Collaborator unreachable or the response could not be read.
    #[error("failed to load courses")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FetchError {
    /// Human-readable message for the error view. Collaborator payloads
    /// carry their own text; everything else falls back to the generic one.
    pub fn message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            GENERIC_FETCH_MESSAGE.to_string()
        } else {
            msg
        }
    }
}

/// Opening a single-course view.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No course identity was available for a single-course view; terminal
    /// for that view, the caller routes back to a listing.
    #[error("no course selected")]
    MissingSelector,
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
