//! PDF export behind a pluggable, trait-based capability.
//!
//! Only `DisabledPdfExporter` exists today. `AppState` holds an
//! `Arc<dyn PdfExporter>` so a real markdown renderer can be dropped in later.

use std::path::PathBuf;

use async_trait::async_trait;

pub mod handlers;

pub const EXPORT_DISABLED_MESSAGE: &str = "PDF export temporarily disabled.";

/// Result of an export attempt. `file` is set only when a PDF was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub message: String,
    pub file: Option<PathBuf>,
}

#[async_trait]
pub trait PdfExporter: Send + Sync {
    async fn export(&self, resume_markdown: &str) -> ExportOutcome;
}

/// Placeholder exporter: renders nothing and reports that export is off.
pub struct DisabledPdfExporter;

#[async_trait]
impl PdfExporter for DisabledPdfExporter {
    async fn export(&self, _resume_markdown: &str) -> ExportOutcome {
        ExportOutcome {
            message: EXPORT_DISABLED_MESSAGE.to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_exporter_returns_fixed_message() {
        for input in ["", "# Jane Doe\n\n- Rust", "\u{1F4C4} unicode"] {
            let outcome = DisabledPdfExporter.export(input).await;
            assert_eq!(outcome.message, "PDF export temporarily disabled.");
            assert!(outcome.file.is_none());
        }
    }
}
