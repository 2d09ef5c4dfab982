//! Resume tailoring pipeline.
//!
//! Flow: read resume file → create_prompt → completion → split_response.
//! Each step runs once; any failure is returned to the caller as-is.

use std::path::Path;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::{CompletionService, CompletionSettings};
use crate::tailoring::prompts::create_prompt;
use crate::tailoring::splitter::split_response;

/// Output of one tailoring run.
///
/// `editable_markdown` is a copy of `resume_markdown`: one is rendered for
/// display, the other is handed to an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailoredResume {
    pub resume_markdown: String,
    pub editable_markdown: String,
    pub suggestions_markdown: String,
}

impl TailoredResume {
    /// (resume, resume for editing, suggestions)
    pub fn into_parts(self) -> (String, String, String) {
        (
            self.resume_markdown,
            self.editable_markdown,
            self.suggestions_markdown,
        )
    }
}

/// Reads a UTF-8 resume from disk.
pub async fn read_resume(path: &Path) -> Result<String, AppError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::ResumeRead(format!("{}: {e}", path.display())))
}

/// Tailors the resume at `resume_path` to `jd_text`.
pub async fn process_resume(
    resume_path: &Path,
    jd_text: &str,
    llm: &dyn CompletionService,
    settings: &CompletionSettings,
) -> Result<TailoredResume, AppError> {
    let resume_text = read_resume(resume_path).await?;
    debug!(
        "Resume loaded: {} bytes, job description: {} bytes",
        resume_text.len(),
        jd_text.len()
    );

    let prompt = create_prompt(&resume_text, jd_text);

    info!("Requesting tailored resume (model: {})", settings.model);
    let completion = llm.complete(&prompt, settings).await?;
    debug!("Completion received: {} bytes", completion.len());

    let split = split_response(&completion)?;

    Ok(TailoredResume {
        editable_markdown: split.resume_markdown.clone(),
        resume_markdown: split.resume_markdown,
        suggestions_markdown: split.suggestions_markdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::Mutex;

    /// Returns a canned completion and remembers what it was asked.
    struct CannedCompletion {
        reply: Result<String, u16>,
        seen: Mutex<Vec<(String, CompletionSettings)>>,
    }

    impl CannedCompletion {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionService for CannedCompletion {
        async fn complete(
            &self,
            prompt: &str,
            settings: &CompletionSettings,
        ) -> Result<String, LlmError> {
            self.seen
                .lock()
                .unwrap()
                .push((prompt.to_string(), settings.clone()));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "quota exceeded".to_string(),
                }),
            }
        }
    }

    fn resume_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_end_to_end_with_canned_completion() {
        let file = resume_file("Jane Doe, Engineer");
        let llm = CannedCompletion::ok("Tailored...\n## Additional Suggestions\nLearn Go");

        let result = process_resume(
            file.path(),
            "Senior Engineer role requiring Go",
            &llm,
            &CompletionSettings::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            result.into_parts(),
            (
                "Tailored...\n".to_string(),
                "Tailored...\n".to_string(),
                "## Additional Suggestions \n\nLearn Go".to_string(),
            )
        );

        let seen = llm.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (prompt, settings) = &seen[0];
        assert!(prompt.contains("Jane Doe, Engineer"));
        assert!(prompt.contains("Senior Engineer role requiring Go"));
        assert_eq!(settings, &CompletionSettings::default());
    }

    #[tokio::test]
    async fn test_settings_are_forwarded() {
        let file = resume_file("resume");
        let llm = CannedCompletion::ok("r## Additional Suggestions s");
        let settings = CompletionSettings {
            model: "gpt-4o".to_string(),
            temperature: 0.0,
        };

        process_resume(file.path(), "jd", &llm, &settings)
            .await
            .unwrap();

        assert_eq!(llm.seen.lock().unwrap()[0].1, settings);
    }

    #[tokio::test]
    async fn test_missing_file_is_resume_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.md");
        let llm = CannedCompletion::ok("unused");

        let err = process_resume(&missing, "jd", &llm, &CompletionSettings::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ResumeRead(ref msg) if msg.contains("nope.md")));
        assert!(llm.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_utf8_resume_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();
        let llm = CannedCompletion::ok("unused");

        let err = process_resume(file.path(), "jd", &llm, &CompletionSettings::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ResumeRead(_)));
    }

    #[tokio::test]
    async fn test_completion_failure_propagates() {
        let file = resume_file("resume");
        let llm = CannedCompletion::failing(429);

        let err = process_resume(file.path(), "jd", &llm, &CompletionSettings::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Llm(LlmError::Api { status: 429, .. })
        ));
        assert_eq!(llm.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_completion_without_marker_is_malformed() {
        let file = resume_file("resume");
        let llm = CannedCompletion::ok("Here is your resume, no suggestions.");

        let err = process_resume(file.path(), "jd", &llm, &CompletionSettings::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}
