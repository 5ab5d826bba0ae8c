//! Kommandozeilen-Argumente des Spline-Editors.

use clap::{Parser, Subcommand};
use glam::Vec3;
use std::path::PathBuf;

/// Bearbeitet und untersucht Bézier-Spline-Dokumente
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Optionen-Datei (TOML); Standard: `spline_editor.toml` neben der Binary
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Punktanzahl, Bogenlänge und Bounding-Box ausgeben
    Info { file: PathBuf },

    /// Gleichmäßig verteilte Weltpositionen ausgeben
    Sample {
        file: PathBuf,
        /// Abstand zwischen zwei Positionen (Standard aus den Optionen)
        #[arg(long)]
        step: Option<f32>,
    },

    /// Hit-Test eines Strahls gegen Punkte und Kanten
    Pick {
        file: PathBuf,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        dir: Vec3,
    },

    /// Punkt einfügen und Dokument speichern
    Insert {
        file: PathBuf,
        /// Index, vor dem eingefügt wird, oder `end`
        #[arg(long, value_parser = parse_insert_index, default_value = "end")]
        at: InsertAt,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        pos: Vec3,
        /// Zieldatei; ohne Angabe wird die Eingabedatei überschrieben
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Einfügeposition für `insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    Index(usize),
    End,
}

impl InsertAt {
    pub fn as_option(self) -> Option<usize> {
        match self {
            InsertAt::Index(i) => Some(i),
            InsertAt::End => None,
        }
    }
}

/// Parsed `x,y,z` in einen Vektor.
pub fn parse_vec3(text: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [x, y, z] = parts[..] else {
        return Err(format!("erwartet x,y,z, erhalten '{text}'"));
    };
    let parse = |s: &str| {
        s.parse::<f32>()
            .map_err(|e| format!("ungültige Zahl '{s}': {e}"))
    };
    Ok(Vec3::new(parse(x)?, parse(y)?, parse(z)?))
}

fn parse_insert_index(text: &str) -> Result<InsertAt, String> {
    if text.eq_ignore_ascii_case("end") {
        return Ok(InsertAt::End);
    }
    text.parse::<usize>()
        .map(InsertAt::Index)
        .map_err(|_| format!("erwartet Index oder 'end', erhalten '{text}'"))
}
