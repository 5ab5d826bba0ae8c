//! Zentrale Konfiguration für den Spline-Editor.
//!
//! `SplineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Punkte ──────────────────────────────────────────────────────────

/// Mindestanzahl an Kontrollpunkten; darunter wird nicht gelöscht.
pub const MIN_POINTS: usize = spline_engine::DEFAULT_MIN_POINTS;
/// Höchstanzahl an Kontrollpunkten; darüber wird nicht eingefügt.
pub const MAX_POINTS: usize = 1000;

// ── Picking ─────────────────────────────────────────────────────────

/// Auswahlradius (Welteinheiten) für Punkt- und Kanten-Treffer.
pub const SELECTION_RADIUS: f32 = 0.8;

// ── Querneigung ─────────────────────────────────────────────────────

/// Erlaubter Betrag der Querneigung in Grad.
pub const ANGLE_RANGE: f32 = 180.0;

// ── Resampling ──────────────────────────────────────────────────────

/// Zwischenpunkte pro Bézier-Segment beim Dicht-Sampling.
pub const SAMPLES_PER_SEGMENT: usize = 16;
/// Standard-Abstand für gleichmäßig verteilte Positionen.
pub const DEFAULT_SAMPLE_STEP: f32 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Spline-Optionen.
/// Wird als `spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Mindestanzahl an Punkten pro Spline
    pub min_points: usize,
    /// Höchstanzahl an Punkten pro Spline
    pub max_points: usize,

    // ── Picking ─────────────────────────────────────────────────
    /// Auswahlradius in Welteinheiten
    pub selection_radius: f32,

    // ── Querneigung ─────────────────────────────────────────────
    /// Betragsgrenze für den Punktwinkel (Grad)
    #[serde(default = "default_angle_range")]
    pub angle_range: f32,

    // ── Resampling ──────────────────────────────────────────────
    /// Zwischenpunkte pro Segment für die dichte Polyline
    #[serde(default = "default_samples_per_segment")]
    pub samples_per_segment: usize,
    /// Standard-Abstand für `sample`
    #[serde(default = "default_sample_step")]
    pub default_sample_step: f32,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            min_points: MIN_POINTS,
            max_points: MAX_POINTS,
            selection_radius: SELECTION_RADIUS,
            angle_range: ANGLE_RANGE,
            samples_per_segment: SAMPLES_PER_SEGMENT,
            default_sample_step: DEFAULT_SAMPLE_STEP,
        }
    }
}

/// Serde-Default für `angle_range` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_angle_range() -> f32 {
    ANGLE_RANGE
}

fn default_samples_per_segment() -> usize {
    SAMPLES_PER_SEGMENT
}

fn default_sample_step() -> f32 {
    DEFAULT_SAMPLE_STEP
}

impl SplineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_editor.toml")
    }

    /// Klemmt einen Winkel auf `±angle_range`.
    pub fn clamp_angle(&self, angle: f32) -> f32 {
        let range = self.angle_range.abs();
        angle.clamp(-range, range)
    }
}
