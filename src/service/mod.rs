pub mod challenges;
pub mod interview;
pub mod jitter;
pub mod llm;
pub mod profile;
pub mod sanitize;
pub mod schema;

pub use challenges::ChallengeService;
pub use interview::InterviewService;
pub use llm::LlmClient;
pub use profile::ProfileService;

/// Provenance of a pipeline result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Validated output of the AI collaborator
    Ai,
    /// Deterministic local substitute
    Fallback,
}

/// Truncate free-form text to at most `max_chars` characters, on a char
/// boundary, before it is interpolated into a prompt.
pub(crate) fn truncate_text(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
