//! Splits a completion into the tailored resume and the suggestions section.

use thiserror::Error;

/// Heading that separates the tailored resume from the suggestions.
pub const SUGGESTIONS_MARKER: &str = "## Additional Suggestions";

/// Heading prepended to the suggestions section returned to callers.
const SUGGESTIONS_PREFIX: &str = "## Additional Suggestions \n\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("completion has no \"## Additional Suggestions\" section")]
    MissingMarker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResponse {
    pub resume_markdown: String,
    pub suggestions_markdown: String,
}

/// Partitions `completion` at the first suggestions marker.
///
/// The resume half is returned verbatim. The suggestions half is re-headed with
/// `SUGGESTIONS_PREFIX` after dropping the whitespace that followed the marker.
/// Any later marker stays inside the suggestions.
pub fn split_response(completion: &str) -> Result<SplitResponse, SplitError> {
    let (resume, suggestions) = completion
        .split_once(SUGGESTIONS_MARKER)
        .ok_or(SplitError::MissingMarker)?;

    let suggestions = suggestions.trim_start();

    Ok(SplitResponse {
        resume_markdown: resume.to_string(),
        suggestions_markdown: format!("{SUGGESTIONS_PREFIX}{suggestions}"),
    })
}
