//! Document renderer: resume JSON → paginated PDF.
//!
//! Split in two stages so layout stays testable without a PDF toolchain:
//! `template` deterministically composes a Typst source document (all layout
//! decisions live there), and `engine` hands that source to the Typst
//! compiler, which owns line-breaking, text measurement, and pagination.

pub mod engine;
pub mod handlers;
pub mod history;
pub mod template;
pub mod theme;

use thiserror::Error;

use crate::models::resume::ResumeDocument;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("resume is missing basics.name")]
    MissingName,

    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),

    #[error("failed to write Typst source: {0}")]
    WriteSource(#[source] std::io::Error),

    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),

    #[error("Typst CLI exited with status {status}: {stderr}")]
    TypstExit { status: i32, stderr: String },

    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// Renders a resume document to PDF bytes. Deterministic and free of
/// external calls apart from the local Typst compiler invocation.
pub fn render(document: &ResumeDocument) -> Result<Vec<u8>, RenderError> {
    let source = template::resume_to_typst(document)?;
    engine::compile_typst(&source)
}
