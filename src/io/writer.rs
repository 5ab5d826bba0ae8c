//! Schreiben von Spline-Dokumenten.

use super::document::SplineDocument;
use crate::app::SplineObject;
use anyhow::{Context, Result};
use std::path::Path;

/// Serialisiert ein Spline-Objekt als formatiertes JSON.
pub fn write_spline_document(object: &SplineObject) -> Result<String> {
    let document = SplineDocument::from_object(object);
    serde_json::to_string_pretty(&document)
        .context("Spline-Dokument konnte nicht serialisiert werden")
}

/// Speichert ein Spline-Objekt in eine Datei.
pub fn save_spline_file(object: &SplineObject, path: &Path) -> Result<()> {
    let content = write_spline_document(object)?;
    std::fs::write(path, content)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path.display()))?;
    log::info!(
        "Spline gespeichert: {} ({} Punkte)",
        path.display(),
        object.spline().point_count()
    );
    Ok(())
}
