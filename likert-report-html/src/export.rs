//! Handing rendered reports to an exporter.

use std::path::PathBuf;

use likert_survey::ResultsProjection;
use tracing::{error, info};

use crate::{ReportOptions, render_report_html};

/// An exported report that can be opened or shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Location of the exported file.
    pub path: PathBuf,
    /// MIME type of the file, e.g. `text/html` or `application/pdf`.
    pub mime_type: &'static str,
}

/// Trait for anything that turns report HTML into an openable artifact.
///
/// A platform print service producing a PDF is one implementation; writing
/// the HTML to disk (`HtmlFileExporter`) is another.
pub trait ReportExporter {
    /// The error type for this exporter.
    type Error: Into<anyhow::Error>;

    /// Export a complete HTML document.
    fn export(&self, html: &str) -> Result<Artifact, Self::Error>;
}

/// Error type for report export.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The exporter failed (I/O, print service, share sheet, etc.)
    #[error("Report export failed: {0}")]
    Export(#[from] anyhow::Error),
}

/// Render the projection to HTML and export it.
///
/// Failures are logged and returned so the caller can show them.
pub fn export_report<E: ReportExporter>(
    projection: &ResultsProjection<'_>,
    options: &ReportOptions,
    exporter: &E,
) -> Result<Artifact, ReportError> {
    let html = render_report_html(projection, options);
    match exporter.export(&html) {
        Ok(artifact) => {
            info!(
                path = %artifact.path.display(),
                mime_type = artifact.mime_type,
                sections = projection.len(),
                "report exported"
            );
            Ok(artifact)
        }
        Err(err) => {
            let err = err.into();
            error!(error = %err, "report export failed");
            Err(ReportError::Export(err))
        }
    }
}

/// Error type for `HtmlFileExporter`.
#[derive(Debug, thiserror::Error)]
pub enum HtmlFileExporterError {
    #[error("Failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Exporter writing the HTML document into a directory.
#[derive(Debug, Clone)]
pub struct HtmlFileExporter {
    dir: PathBuf,
    file_name: String,
}

impl HtmlFileExporter {
    /// Write reports into `dir` as `assessment-results.html`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: "assessment-results.html".to_string(),
        }
    }

    /// Use a different file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Full path of the file this exporter writes.
    pub fn target(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl ReportExporter for HtmlFileExporter {
    type Error = HtmlFileExporterError;

    fn export(&self, html: &str) -> Result<Artifact, Self::Error> {
        let path = self.target();
        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&path, html))
            .map_err(|source| HtmlFileExporterError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(Artifact {
            path,
            mime_type: "text/html",
        })
    }
}
