//! Document export
//!
//! Writes generated documents to plain files:
//! - Text (`.txt`, `text/plain`) and Markdown (`.md`, `text/markdown`)
//! - Conventional filenames per document type
//! - Content is written byte-for-byte; no conversion between formats

use crate::error::{ConfigError, ExportError};
use doctrine_model::DraftMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Export file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    #[serde(alias = "txt")]
    Text,
    #[serde(alias = "md")]
    Markdown,
}

impl ExportFormat {
    /// File extension without the dot
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
        }
    }

    /// MIME type of the exported file
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Markdown => "text/markdown",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// `{name}-doctrine.{ext}`
#[must_use]
pub fn doctrine_filename(blueprint_name: &str, format: ExportFormat) -> String {
    format!("{blueprint_name}-doctrine.{}", format.extension())
}

/// `{title}-playbook.{ext}`
#[must_use]
pub fn playbook_filename(title: &str, format: ExportFormat) -> String {
    format!("{title}-playbook.{}", format.extension())
}

/// `twin-draft-{mode}.{ext}`
#[must_use]
pub fn twin_draft_filename(mode: DraftMode, format: ExportFormat) -> String {
    format!("twin-draft-{}.{}", mode.as_str(), format.extension())
}

/// Replace characters that would let a filename leave its directory
fn sanitize_filename(filename: &str) -> Result<String, ExportError> {
    let cleaned: String = filename
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return Err(ExportError::InvalidFilename(filename.to_string()));
    }
    Ok(cleaned)
}

/// Writes documents into one export directory
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    /// Create new exporter rooted at `dir`
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `content` to `filename` inside the export directory
    ///
    /// Creates the directory when missing and replaces an existing file of
    /// the same name. Returns the written path.
    ///
    /// # Errors
    /// - `ExportError::InvalidFilename` for empty or dot-only names
    /// - `ExportError::Io` when the directory or file cannot be written
    pub async fn export(
        &self,
        content: &str,
        filename: &str,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        let name = sanitize_filename(filename)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ExportError::io_error(&self.dir, e))?;

        let path = self.dir.join(name);
        tokio::fs::write(&path, content.as_bytes())
            .await
            .map_err(|e| ExportError::io_error(&path, e))?;

        tracing::info!(
            path = %path.display(),
            mime = format.mime_type(),
            bytes = content.len(),
            "document exported"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_follow_document_conventions() {
        assert_eq!(
            doctrine_filename("Operator Zero", ExportFormat::Text),
            "Operator Zero-doctrine.txt"
        );
        assert_eq!(
            playbook_filename("Category King", ExportFormat::Markdown),
            "Category King-playbook.md"
        );
        assert_eq!(
            twin_draft_filename(DraftMode::InvestmentEval, ExportFormat::Text),
            "twin-draft-investment-eval.txt"
        );
    }

    #[test]
    fn format_parsing() {
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("Text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ConfigError::UnknownFormat(_))
        ));
        assert_eq!(ExportFormat::Markdown.mime_type(), "text/markdown");
    }

    #[test]
    fn sanitize_blocks_traversal() {
        assert_eq!(sanitize_filename("../etc/passwd").unwrap(), ".._etc_passwd");
        assert_eq!(sanitize_filename("a\\b.txt").unwrap(), "a_b.txt");
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("  ").is_err());
    }
}
