//! Typst compilation engine.
//!
//! Writes the composed source into a temporary directory, invokes the Typst
//! CLI, and returns the PDF bytes. Line-breaking, text measurement, and
//! pagination all belong to the compiler.

use std::fs;
use std::process::Command;
use tempfile::tempdir;

use super::RenderError;

const SOURCE_FILE: &str = "resume.typ";
const OUTPUT_FILE: &str = "resume.pdf";

/// Compile a Typst source string to a PDF document.
pub fn compile_typst(source: &str) -> Result<Vec<u8>, RenderError> {
    let temp_dir = tempdir().map_err(RenderError::TempDir)?;

    let typ_path = temp_dir.path().join(SOURCE_FILE);
    fs::write(&typ_path, source).map_err(RenderError::WriteSource)?;

    let output_path = temp_dir.path().join(OUTPUT_FILE);
    let output = Command::new("typst")
        .arg("compile")
        .arg(&typ_path)
        .arg(&output_path)
        .current_dir(temp_dir.path())
        .output()
        .map_err(RenderError::TypstIo)?;

    if !output.status.success() {
        return Err(RenderError::TypstExit {
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    fs::read(&output_path).map_err(RenderError::ReadPdf)
}
