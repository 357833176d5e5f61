//! Document Text Loader: turns a PDF or plain-text resume into plain text.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Resume file not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported file type '{0}'. Please use PDF or TXT.")]
    UnsupportedFormat(String),

    #[error("No text could be extracted from the resume")]
    EmptyContent,

    #[error("Failed to read resume: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resume text is not valid UTF-8")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Pdf,
    Text,
}

impl SourceFormat {
    /// Infers the format from a file name's extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Result<Self, LoadError> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(SourceFormat::Pdf),
            "txt" => Ok(SourceFormat::Text),
            _ => Err(LoadError::UnsupportedFormat(if extension.is_empty() {
                name.to_string()
            } else {
                format!(".{extension}")
            })),
        }
    }
}

/// Extracted resume text. Built once per run and never mutated.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    text: String,
    format: SourceFormat,
}

impl ResumeDocument {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }
}

/// Loads a resume from disk. The format check happens before any I/O.
pub async fn load_resume(path: &Path) -> Result<ResumeDocument, LoadError> {
    let format = SourceFormat::from_file_name(&path.to_string_lossy())?;

    if !tokio::fs::try_exists(path).await? {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let bytes = tokio::fs::read(path).await?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    extract(format, bytes).await
}

/// Loads a resume from uploaded bytes, inferring the format from `file_name`.
pub async fn load_resume_bytes(file_name: &str, bytes: Vec<u8>) -> Result<ResumeDocument, LoadError> {
    let format = SourceFormat::from_file_name(file_name)?;
    extract(format, bytes).await
}

async fn extract(format: SourceFormat, bytes: Vec<u8>) -> Result<ResumeDocument, LoadError> {
    let text = match format {
        SourceFormat::Text => String::from_utf8(bytes)?,
        SourceFormat::Pdf => tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
            .await
            .map_err(|e| LoadError::Pdf(e.to_string()))??,
    };

    if text.trim().is_empty() {
        return Err(LoadError::EmptyContent);
    }

    Ok(ResumeDocument { text, format })
}

/// Pages that yield no text still contribute an empty line, so page order is kept.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, LoadError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| LoadError::Pdf(e.to_string()))?;
    debug!("Extracted {} PDF pages", pages.len());
    Ok(pages.join("\n"))
}
