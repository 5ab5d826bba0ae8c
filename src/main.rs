//! Spline Editor.
//!
//! Kommandozeilen-Werkzeug zum Untersuchen und Bearbeiten von
//! Bézier-Spline-Dokumenten (JSON).

use anyhow::Result;
use clap::Parser;
use spline_editor::cli::{CliArgs, Command};
use spline_editor::shared::spline_geometry::{resample_segment_count, MAX_RESAMPLE_SEGMENTS};
use spline_editor::{load_spline_file, save_spline_file, SplineHit, SplineOptions};

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse();
    log::info!("Spline Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.unwrap_or_else(SplineOptions::config_path);
    let options = SplineOptions::load_from_file(&config_path);

    match args.command {
        Command::Info { file } => {
            let object = load_spline_file(&file, &options)?;
            let spline = object.spline();
            println!("Punkte:      {}", spline.point_count());
            println!("Segmente:    {}", spline.segment_count());
            println!("Länge lokal: {:.4}", spline.spline_length());
            println!("Länge Welt:  {:.4}", object.world_length());
            match object.world_bounds() {
                Some(bounds) => println!(
                    "Bounds:      [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
                    bounds.min.x,
                    bounds.min.y,
                    bounds.min.z,
                    bounds.max.x,
                    bounds.max.y,
                    bounds.max.z
                ),
                None => println!("Bounds:      -"),
            }
            if let Some(bounds) = object.world_bounds() {
                let (center, size) = (bounds.center(), bounds.size());
                println!(
                    "Zentrum:     [{:.3}, {:.3}, {:.3}]  Größe: [{:.3}, {:.3}, {:.3}]",
                    center.x, center.y, center.z, size.x, size.y, size.z
                );
            }
        }
        Command::Sample { file, step } => {
            let object = load_spline_file(&file, &options)?;
            let step = step.unwrap_or(options.default_sample_step);
            if resample_segment_count(object.world_length(), step).is_none() {
                anyhow::bail!(
                    "Ungültiger Abstand {} (größer als 0, höchstens {} Abschnitte)",
                    step,
                    MAX_RESAMPLE_SEGMENTS
                );
            }
            for p in object.sample_by_distance(step) {
                println!("{:.4} {:.4} {:.4}", p.x, p.y, p.z);
            }
        }
        Command::Pick { file, origin, dir } => {
            let object = load_spline_file(&file, &options)?;
            match object.hit_test(origin, dir) {
                Some(SplineHit::Point { index, distance }) => {
                    println!("Punkt {} (Abstand {:.4})", index, distance);
                }
                Some(SplineHit::Edge {
                    start,
                    end,
                    position,
                    distance,
                }) => {
                    println!(
                        "Kante {}-{} bei [{:.4}, {:.4}, {:.4}] (Abstand {:.4})",
                        start, end, position.x, position.y, position.z, distance
                    );
                }
                None => println!("Kein Treffer"),
            }
        }
        Command::Insert {
            file,
            at,
            pos,
            out,
        } => {
            let mut object = load_spline_file(&file, &options)?;
            let Some(index) = object.insert_point(at.as_option(), pos) else {
                anyhow::bail!(
                    "Punkt nicht eingefügt: Maximum von {} Punkten erreicht",
                    options.max_points
                );
            };
            let target = out.unwrap_or(file);
            save_spline_file(&object, &target)?;
            println!("Punkt {} eingefügt -> {}", index, target.display());
        }
    }

    Ok(())
}
