#![deny(unsafe_code)]
//! CLI binary for aerowave.
//!
//! Subcommands:
//! - `airflow` — airframe point cloud with a flow vector per point
//! - `scatter` — target shape with incoming and scattered wave rays
//! - `summary` — ground-hit percentage only
//! - `replay <seed-json>` — rebuild a scene from a recorded `Seed`
//! - `schema <simulation>` — parameter schema of a simulation
//! - `list` — print available simulations, shapes, fields and pairings
//!
//! Set `RUST_LOG=debug` for generation details on stderr.

mod error;
mod present;

use aerowave_core::{Scene, SceneSink, Seed, ShapeKind, Simulation, Xorshift64};
use aerowave_field::{summarize, FlowKind, Pairing};
use aerowave_scene::{ScatterSimulation, ShapeParameters, SimulationKind};
use clap::{Parser, Subcommand};
use error::CliError;
use log::debug;
use present::{DigestSink, JsonSink};
use serde_json::json;
use std::io::{self, Write};
use std::process;

#[derive(Parser)]
#[command(name = "aerowave", about = "Procedural airflow and wave-scatter scenes")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample a flow field over the airframe point cloud.
    Airflow {
        /// Fuselage angles and stations.
        #[arg(short, long, default_value_t = 60)]
        resolution: usize,

        /// Wing half-span.
        #[arg(long, default_value_t = 5.0)]
        wing_span: f64,

        /// Wing half-chord.
        #[arg(long, default_value_t = 0.1)]
        wing_width: f64,

        /// Fuselage length.
        #[arg(short, long, default_value_t = 10.0)]
        length: f64,

        /// Fuselage radius.
        #[arg(long, default_value_t = 1.0)]
        height: f64,

        /// Flow field (sink, drift).
        #[arg(short, long, default_value = "sink")]
        field: String,
    },
    /// Build a target and draw incoming and scattered waves around it.
    Scatter {
        /// Target shape (sphere, cube, aircraft).
        #[arg(long, default_value = "aircraft")]
        shape: String,

        /// Target size.
        #[arg(short, long, default_value_t = 1.0)]
        size: f64,

        /// Radar frequency in Hz.
        #[arg(short, long, default_value_t = 1e10)]
        frequency: f64,

        /// Number of radar waves.
        #[arg(short, long, default_value_t = 1000)]
        num_points: usize,

        /// Angular resolution of round target parts.
        #[arg(short, long, default_value_t = 50)]
        resolution: usize,

        /// Ray pairing (paired, independent).
        #[arg(long, default_value = "paired")]
        pairing: String,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Parameter overrides as a JSON object, applied after the flags.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Print only the ground-hit percentage of a batch of reflections.
    Summary {
        /// Wave source radius.
        #[arg(short, long, default_value_t = 1.0)]
        size: f64,

        /// Number of reflections to sample.
        #[arg(short, long, default_value_t = 1000)]
        num_points: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Rebuild a scene from a recorded seed (JSON).
    Replay {
        /// Seed record, e.g. '{"simulation":"scatter","params":{},"seed":42}'.
        seed: String,
    },
    /// Print the parameter schema of a simulation.
    Schema {
        /// Simulation name (airflow, scatter).
        simulation: String,
    },
    /// List simulations, shapes, flow fields and pairings.
    List,
}

fn parse_json_object(raw: &str, what: &str) -> Result<serde_json::Value, CliError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| CliError::Input(format!("invalid {what} JSON: {e}")))?;
    if !value.is_object() {
        return Err(CliError::Input(format!("{what} must be a JSON object")));
    }
    Ok(value)
}

/// Builds `sim` from `seed` and hands the scene to the selected sink.
fn present(
    sim: &SimulationKind,
    seed: &Seed,
    json_mode: bool,
    out: &mut dyn Write,
) -> Result<Scene, CliError> {
    let mut rng = seed.rng();
    let scene = sim.build(&mut rng)?;
    if json_mode {
        JsonSink::new(&mut *out).present(&scene)?;
    } else {
        DigestSink::new(&mut *out).present(&scene)?;
        writeln!(out, "replay:    {}", serde_json::to_string(seed)?)
            .map_err(|e| CliError::Rendering(e.to_string()))?;
    }
    Ok(scene)
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<(), CliError> {
    let rendering = |e: io::Error| CliError::Rendering(e.to_string());
    match cli.command {
        Command::List => {
            let simulations = SimulationKind::list_simulations();
            let shapes = ShapeKind::list_names();
            let fields = FlowKind::list_names();
            let pairings = Pairing::list_names();
            if cli.json {
                let info = json!({
                    "simulations": simulations,
                    "shapes": shapes,
                    "fields": fields,
                    "pairings": pairings,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&info)?).map_err(rendering)?;
            } else {
                writeln!(out, "Simulations:").map_err(rendering)?;
                for name in simulations {
                    writeln!(out, "  {name}").map_err(rendering)?;
                }
                writeln!(out, "Shapes:\n  {}", shapes.join(", ")).map_err(rendering)?;
                writeln!(out, "Fields:\n  {}", fields.join(", ")).map_err(rendering)?;
                writeln!(out, "Pairings:\n  {}", pairings.join(", ")).map_err(rendering)?;
            }
        }
        Command::Schema { simulation } => {
            let sim = SimulationKind::from_name(&simulation, &json!({}))?;
            writeln!(out, "{}", serde_json::to_string_pretty(&sim.param_schema())?)
                .map_err(rendering)?;
        }
        Command::Airflow {
            resolution,
            wing_span,
            wing_width,
            length,
            height,
            field,
        } => {
            let mut seed = Seed::new("airflow", 0);
            seed.params = json!({
                "resolution": resolution,
                "wing_span": wing_span,
                "wing_width": wing_width,
                "length": length,
                "height": height,
                "field": field,
            });
            let sim = SimulationKind::from_seed(&seed)?;
            present(&sim, &seed, cli.json, out)?;
        }
        Command::Scatter {
            shape,
            size,
            frequency,
            num_points,
            resolution,
            pairing,
            seed,
            params,
        } => {
            let overrides = parse_json_object(&params, "--params")?;
            let flags = ShapeParameters {
                shape: ShapeKind::from_name(&shape)?,
                size,
                frequency,
                num_points,
                resolution,
                pairing: Pairing::from_name(&pairing)?,
            };
            let scatter = ScatterSimulation::new(flags.merged(&overrides)?)?;
            debug!("scatter parameters: {:?}", scatter.shape_parameters());
            let mut record = Seed::new("scatter", seed);
            record.params = scatter.params();
            present(&SimulationKind::Scatter(scatter), &record, cli.json, out)?;
        }
        Command::Summary {
            size,
            num_points,
            seed,
        } => {
            let summary = summarize(&mut Xorshift64::new(seed), size, num_points)?;
            if cli.json {
                let info = json!({
                    "ground_hits": summary.ground_hits(),
                    "total": summary.total(),
                    "percentage": summary.percentage(),
                    "seed": seed,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&info)?).map_err(rendering)?;
            } else {
                writeln!(out, "{summary}").map_err(rendering)?;
            }
        }
        Command::Replay { seed } => {
            let record: Seed = serde_json::from_str(&seed)
                .map_err(|e| CliError::Input(format!("invalid seed JSON: {e}")))?;
            let sim = SimulationKind::from_seed(&record)?;
            present(&sim, &record, cli.json, out)?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    let stdout = io::stdout();
    if let Err(e) = run(cli, &mut stdout.lock()) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let _ = env_logger::builder().is_test(true).try_init();
        let cli = Cli::try_parse_from(std::iter::once("aerowave").chain(args.iter().copied()))
            .map_err(|e| CliError::Input(e.to_string()))?;
        let mut buf = Vec::new();
        run(cli, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn list_names_everything() {
        let text = run_args(&["list"]).unwrap();
        assert!(text.contains("airflow") && text.contains("scatter"));
        assert!(text.contains("sphere, cube, aircraft"));
        assert!(text.contains("sink, drift"));
    }

    #[test]
    fn list_json_is_parseable() {
        let text = run_args(&["--json", "list"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["shapes"][2], "aircraft");
    }

    #[test]
    fn airflow_defaults_produce_reference_cloud() {
        let text = run_args(&["airflow"]).unwrap();
        assert!(text.contains("points:    3640"), "{text}");
        assert!(text.contains("vectors:   3640"), "{text}");
    }

    #[test]
    fn airflow_json_scene_has_aligned_field() {
        let text = run_args(&["--json", "airflow", "--resolution", "6"]).unwrap();
        let scene: Scene = serde_json::from_str(&text).unwrap();
        assert_eq!(scene.cloud.len(), 37);
        assert_eq!(scene.field.unwrap().len(), 37);
    }

    #[test]
    fn scatter_cube_reports_percentage_and_replay_line() {
        let text =
            run_args(&["scatter", "--shape", "cube", "--size", "2", "-n", "100"]).unwrap();
        assert!(text.contains("points:    8"), "{text}");
        assert!(text.contains("rays:      100 incoming, 100 scattered"), "{text}");
        assert!(text.contains("Ground Hit Percentage: "), "{text}");
        assert!(text.contains("Wavelength: 0.0300 m"), "{text}");
        assert!(text.contains("replay:    {"), "{text}");
    }

    #[test]
    fn scatter_params_override_flags() {
        let text = run_args(&[
            "--json",
            "scatter",
            "--shape",
            "sphere",
            "--params",
            r#"{"shape": "cube", "num_points": 5}"#,
        ])
        .unwrap();
        let scene: Scene = serde_json::from_str(&text).unwrap();
        assert_eq!(scene.cloud.len(), 8);
        assert_eq!(scene.incoming.len(), 5);
    }

    #[test]
    fn scatter_is_deterministic_per_seed() {
        let args = ["--json", "scatter", "-n", "20", "--seed", "9"];
        assert_eq!(run_args(&args).unwrap(), run_args(&args).unwrap());
    }

    #[test]
    fn invalid_size_refuses_to_run() {
        let err = run_args(&["scatter", "--size", "0"]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("size"));
    }

    #[test]
    fn unknown_shape_is_input_error() {
        let err = run_args(&["scatter", "--shape", "torus"]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn bad_params_json_is_input_error() {
        let err = run_args(&["scatter", "--params", "{nope"]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        let err = run_args(&["scatter", "--params", "[1]"]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn mistyped_params_refuse_to_run() {
        let err = run_args(&["scatter", "--params", r#"{"num_points": -4, "size": "big"}"#])
            .unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("num_points") || err.to_string().contains("size"));
    }

    #[test]
    fn replay_with_mistyped_params_is_input_error() {
        let seed = r#"{"simulation": "airflow", "params": {"resolution": -1}, "seed": 1}"#;
        let err = run_args(&["replay", seed]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("resolution"), "{err}");
    }

    #[test]
    fn summary_zero_points_is_input_error() {
        let err = run_args(&["summary", "-n", "0"]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn summary_json_has_percentage_in_range() {
        let text = run_args(&["--json", "summary", "-n", "500"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        let pct = v["percentage"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&pct));
        assert_eq!(v["total"], 500);
    }

    #[test]
    fn replay_matches_direct_scatter_run() {
        let direct = run_args(&["--json", "scatter", "-n", "15", "--seed", "4"]).unwrap();
        let seed = json!({
            "simulation": "scatter",
            "params": {"num_points": 15},
            "seed": 4
        })
        .to_string();
        let replayed = run_args(&["--json", "replay", &seed]).unwrap();
        assert_eq!(direct, replayed);
    }

    #[test]
    fn replay_unknown_simulation_is_simulation_error() {
        let seed = r#"{"simulation": "fluid", "params": {}, "seed": 1}"#;
        let err = run_args(&["replay", seed]).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn schema_prints_parameter_schema() {
        let text = run_args(&["schema", "airflow"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["resolution"]["default"], 60);
    }
}
