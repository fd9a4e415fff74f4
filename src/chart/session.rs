use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::chart::ChartConfig;
use crate::pages::PageLayout;
use crate::stats::leaderboard::DisplayScore;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode document for {surface}: {source}")]
    Encode {
        surface: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Leaderboard row as emitted into a list container document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "puntaje")]
    pub score: DisplayScore,
}

/// The charting collaborator. It owns all drawing; the contract here is
/// create-per-surface plus explicit disposal of a previous instance.
pub trait ChartBackend {
    fn create(&mut self, surface: &str, config: &ChartConfig) -> Result<(), RenderError>;
    fn dispose(&mut self, surface: &str) -> Result<(), RenderError>;
    fn write_list(&mut self, container: &str, entries: &[ListEntry]) -> Result<(), RenderError>;
}

/// One rendering session per page load. Owns the map of surfaces with an
/// active chart; rebinding a surface disposes the previous instance first,
/// and surfaces absent from the page layout are skipped silently.
pub struct RenderSession<'a, B: ChartBackend> {
    layout: &'a PageLayout,
    backend: B,
    active: BTreeSet<String>,
    lists_rendered: usize,
}

impl<'a, B: ChartBackend> RenderSession<'a, B> {
    pub fn new(layout: &'a PageLayout, backend: B) -> Self {
        Self {
            layout,
            backend,
            active: BTreeSet::new(),
            lists_rendered: 0,
        }
    }

    /// Returns whether the chart was actually bound (false = surface not on
    /// this page).
    pub fn render_chart(&mut self, surface: &str, config: ChartConfig) -> Result<bool, RenderError> {
        if !self.layout.has_surface(surface) {
            tracing::debug!(surface, "surface not on page, skipping chart");
            return Ok(false);
        }
        if self.active.contains(surface) {
            self.backend.dispose(surface)?;
        }
        self.backend.create(surface, &config)?;
        self.active.insert(surface.to_string());
        Ok(true)
    }

    pub fn render_list(&mut self, container: &str, entries: &[ListEntry]) -> Result<bool, RenderError> {
        if !self.layout.has_list(container) {
            tracing::debug!(container, "list container not on page, skipping");
            return Ok(false);
        }
        self.backend.write_list(container, entries)?;
        self.lists_rendered += 1;
        Ok(true)
    }

    pub fn active_charts(&self) -> usize {
        self.active.len()
    }

    pub fn lists_rendered(&self) -> usize {
        self.lists_rendered
    }
}

/// Shipped backend: one JSON document per surface under the output
/// directory; disposal removes the surface's document.
pub struct JsonFileBackend {
    out_dir: PathBuf,
}

impl JsonFileBackend {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    fn surface_path(&self, surface: &str) -> PathBuf {
        self.out_dir.join(format!("{surface}.json"))
    }

    fn write_document<T: Serialize>(&self, surface: &str, document: &T) -> Result<(), RenderError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| RenderError::Io {
            path: self.out_dir.clone(),
            source,
        })?;
        let encoded = serde_json::to_string_pretty(document).map_err(|source| RenderError::Encode {
            surface: surface.to_string(),
            source,
        })?;
        let path = self.surface_path(surface);
        fs::write(&path, encoded).map_err(|source| RenderError::Io { path, source })
    }
}

impl ChartBackend for JsonFileBackend {
    fn create(&mut self, surface: &str, config: &ChartConfig) -> Result<(), RenderError> {
        self.write_document(surface, config)
    }

    fn dispose(&mut self, surface: &str) -> Result<(), RenderError> {
        let path = self.surface_path(surface);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(RenderError::Io { path, source }),
        }
    }

    fn write_list(&mut self, container: &str, entries: &[ListEntry]) -> Result<(), RenderError> {
        self.write_document(container, &entries)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/session.rs"]
mod tests;
