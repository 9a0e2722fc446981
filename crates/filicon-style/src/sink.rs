//! Stylesheet delivery.
//!
//! A sink receives each compiled stylesheet and is responsible for putting
//! it wherever the UI reads styles from.

use std::io::Write;
use std::path::{Path, PathBuf};

use filicon_common::StyleError;
use tracing::info;

pub trait StylesheetSink {
    fn attach(&mut self, css: &str) -> Result<(), StyleError>;
}

/// Writes each stylesheet to a file, replacing the previous one.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StylesheetSink for FileSink {
    fn attach(&mut self, css: &str) -> Result<(), StyleError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StyleError::SinkError(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        std::fs::write(&self.path, css).map_err(|e| {
            StyleError::SinkError(format!("failed to write {}: {e}", self.path.display()))
        })?;

        info!(path = %self.path.display(), bytes = css.len(), "icon stylesheet written");
        Ok(())
    }
}

/// Streams each stylesheet to any writer, e.g. stdout.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StylesheetSink for WriterSink<W> {
    fn attach(&mut self, css: &str) -> Result<(), StyleError> {
        self.writer
            .write_all(css.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| StyleError::SinkError(format!("failed to write stylesheet: {e}")))
    }
}

/// Keeps every attached stylesheet in memory, newest last.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    sheets: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&str> {
        self.sheets.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl StylesheetSink for MemorySink {
    fn attach(&mut self, css: &str) -> Result<(), StyleError> {
        self.sheets.push(css.to_string());
        Ok(())
    }
}
