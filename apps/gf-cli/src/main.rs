use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use gf_app::{
    AppResult, RunReport, RunResponse, find_preset, load_yaml, presets, run_params, run_scenario,
    trajectory_to_csv,
};
use gf_model::{GridParams, ImbalanceMode};

#[derive(Parser)]
#[command(name = "gf-cli")]
#[command(about = "GridFreq CLI - Grid frequency transient simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and parameter ranges
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// List scenarios in a file
    Scenarios {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Run one scenario from a file
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Scenario ID to run
        scenario_id: String,
        /// Trajectory export format (defaults to csv when --output is set)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List built-in presets
    Presets,
    /// Run a built-in preset
    RunPreset {
        /// Preset ID (see `presets`)
        preset_id: String,
        /// Trajectory export format (defaults to csv when --output is set)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Plain CSV, one row per sample
    Csv,
    /// JSON run report with parameters and metrics
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Scenarios { scenario_path } => cmd_scenarios(&scenario_path),
        Commands::Run {
            scenario_path,
            scenario_id,
            format,
            output,
        } => cmd_run(&scenario_path, &scenario_id, format, output.as_deref()),
        Commands::Presets => cmd_presets(),
        Commands::RunPreset {
            preset_id,
            format,
            output,
        } => cmd_run_preset(&preset_id, format, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario file: {}", scenario_path.display());
    let file = load_yaml(scenario_path)?;
    println!("✓ Scenario file is valid ({} scenarios)", file.scenarios.len());
    Ok(())
}

fn cmd_scenarios(scenario_path: &Path) -> AppResult<()> {
    let file = load_yaml(scenario_path)?;

    if file.scenarios.is_empty() {
        println!("No scenarios found in file");
    } else {
        println!("Scenarios in '{}':", file.name);
        for scenario in &file.scenarios {
            println!(
                "  {} - {} ({})",
                scenario.id,
                scenario.name,
                describe_params(&scenario.params)
            );
        }
    }
    Ok(())
}

fn cmd_run(
    scenario_path: &Path,
    scenario_id: &str,
    format: Option<ExportFormat>,
    output: Option<&Path>,
) -> AppResult<()> {
    let file = load_yaml(scenario_path)?;
    println!("Running scenario: {}", scenario_id);

    let response = run_scenario(&file, scenario_id)?;
    println!("✓ Simulation completed: {} samples", response.trajectory.len());

    print_response_summary(&response);
    export_response(&response, format, output)
}

fn cmd_presets() -> AppResult<()> {
    println!("Built-in presets:");
    for preset in presets() {
        println!(
            "  {} - {} ({})",
            preset.id,
            preset.name,
            describe_params(&preset.params)
        );
    }
    Ok(())
}

fn cmd_run_preset(
    preset_id: &str,
    format: Option<ExportFormat>,
    output: Option<&Path>,
) -> AppResult<()> {
    let preset = find_preset(preset_id)?;
    println!("Running preset: {} - {}", preset.id, preset.name);

    let response = run_params(&preset.params)?;
    println!("✓ Simulation completed: {} samples", response.trajectory.len());

    print_response_summary(&response);
    export_response(&response, format, output)
}

/// One-line parameter summary for listings.
fn describe_params(params: &GridParams) -> String {
    let event = match params.imbalance_mode {
        ImbalanceMode::Permanent => "permanent",
        ImbalanceMode::Transient4s => "clears at 4 s",
    };
    let regulation = if !params.fcr_enabled {
        "no FCR".to_string()
    } else if params.fcr_lag_enabled {
        format!("droop {} lagged {} s", params.droop, params.t_fcr_s)
    } else {
        format!("droop {}", params.droop)
    };
    format!(
        "dP = {:+.2} pu {}, H = {} s, {}",
        params.delta_p_load_pu, event, params.inertia_h_s, regulation
    )
}

fn variant_label(params: &GridParams) -> &'static str {
    if !params.fcr_enabled {
        "none (inertia only)"
    } else if params.fcr_lag_enabled {
        "lagged droop"
    } else {
        "ideal droop"
    }
}

fn print_response_summary(response: &RunResponse) {
    let m = &response.metrics;

    println!("\nResponse summary:");
    println!("  Regulation: {}", variant_label(&response.params));
    println!("  RoCoF: {:+.3} Hz/s", m.rocof_hz_per_s);
    match &m.nadir {
        Some(nadir) => println!(
            "  Nadir: {:.3} Hz at {:.2} s",
            nadir.frequency_hz, nadir.time_s
        ),
        None => println!("  Nadir: none"),
    }
    println!("  Final frequency: {:.3} Hz", m.f_final_hz);
    match m.f_settle_hz {
        Some(f_settle) => println!("  Settling frequency: {:.3} Hz", f_settle),
        None => println!("  Settling frequency: none (unbounded ramp)"),
    }
}

fn export_response(
    response: &RunResponse,
    format: Option<ExportFormat>,
    output: Option<&Path>,
) -> AppResult<()> {
    let format = match (format, output) {
        (Some(format), _) => format,
        (None, Some(_)) => ExportFormat::Csv,
        (None, None) => return Ok(()),
    };

    let content = match format {
        ExportFormat::Csv => trajectory_to_csv(&response.trajectory),
        ExportFormat::Json => RunReport::from_response(response).to_json()?,
    };

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, content)?;
        println!(
            "\n✓ Exported {} samples to {}",
            response.trajectory.len(),
            path.display()
        );
    } else {
        print!("{}", content);
    }

    Ok(())
}
