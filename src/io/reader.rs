//! Einlesen von Spline-Dokumenten.

use super::document::SplineDocument;
use crate::app::SplineObject;
use crate::shared::SplineOptions;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Parsed ein Spline-Objekt aus einem JSON-String.
///
/// Schlägt fehl bei ungültigem JSON oder mehr Punkten als `options.max_points`.
pub fn parse_spline_document(content: &str, options: &SplineOptions) -> Result<SplineObject> {
    let document: SplineDocument =
        serde_json::from_str(content).context("Spline-Dokument ist kein gültiges JSON")?;

    if document.points.len() > options.max_points {
        bail!(
            "Spline-Dokument enthält {} Punkte, erlaubt sind höchstens {}",
            document.points.len(),
            options.max_points
        );
    }
    if document.points.iter().any(|p| !p.position.is_finite()) {
        bail!("Spline-Dokument enthält nicht-endliche Koordinaten");
    }

    Ok(document.into_object(options.clone()))
}

/// Lädt ein Spline-Objekt aus einer Datei.
pub fn load_spline_file(path: &Path, options: &SplineOptions) -> Result<SplineObject> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path.display()))?;
    let object = parse_spline_document(&content, options)
        .with_context(|| format!("Fehler beim Laden von {}", path.display()))?;
    log::info!(
        "Spline geladen: {} ({} Punkte)",
        path.display(),
        object.spline().point_count()
    );
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    #[test]
    fn test_parse_rederives_missing_handles() {
        let json = r#"{
            "points": [
                { "pos": [0.0, 0.0, 0.0], "back": [0.0, 0.0, 0.0], "forw": [0.0, 0.0, 0.0] },
                { "pos": [5.0, 0.0, 0.0], "back": [5.0, 0.0, 0.0], "forw": [5.0, 0.0, 0.0] },
                { "pos": [10.0, 0.0, 0.0], "back": [10.0, 0.0, 0.0], "forw": [10.0, 0.0, 0.0] }
            ]
        }"#;
        let object =
            parse_spline_document(json, &SplineOptions::default()).expect("Dokument gültig");

        let first = object.spline().points()[0];
        assert!(!first.has_degenerate_handles());
        assert_relative_eq!(object.spline().spline_length(), 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_parse_keeps_stored_handles() {
        let json = r#"{
            "points": [
                { "pos": [0.0, 0.0, 0.0], "back": [0.0, 0.0, 0.0], "forw": [0.0, 4.0, 0.0] },
                { "pos": [10.0, 0.0, 0.0], "back": [10.0, 4.0, 0.0], "forw": [10.0, 0.0, 0.0] }
            ]
        }"#;
        let object =
            parse_spline_document(json, &SplineOptions::default()).expect("Dokument gültig");

        assert_eq!(object.spline().points()[0].forward_handle, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(object.spline().points()[1].back_handle, Vec3::new(10.0, 4.0, 0.0));
    }

    #[test]
    fn test_parse_rejects_too_many_points() {
        let options = SplineOptions {
            max_points: 1,
            ..SplineOptions::default()
        };
        let json = r#"{ "points": [
            { "pos": [0.0, 0.0, 0.0], "back": [0.0, 0.0, 0.0], "forw": [0.0, 0.0, 0.0] },
            { "pos": [1.0, 0.0, 0.0], "back": [1.0, 0.0, 0.0], "forw": [1.0, 0.0, 0.0] }
        ] }"#;
        assert!(parse_spline_document(json, &options).is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_spline_document("{ points: ", &SplineOptions::default()).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_spline_file(
            Path::new("/nonexistent/spline_editor/missing.json"),
            &SplineOptions::default(),
        );
        assert!(result.is_err());
    }
}
