use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bleve_app::{
    AppError, AppResult, CalculationInputs, CalculationResults, Engine, EngineConfig, write_report,
};
use bleve_blast::{BlastModel, METHOD_LABEL};
use bleve_core::units::{celsius, pa};
use bleve_thermo::SaturationProvider;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bleve")]
#[command(about = "BLEVE consequence engine - flash energy and blast distances", long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Configuration sources shared by every command.
#[derive(Args)]
struct EngineArgs {
    /// Engine configuration file (YAML, or JSON by extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Property provider: "table" or "api"
    #[arg(long, global = true)]
    provider: Option<String>,
    /// Base URL of the thermo property service
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full BLEVE calculation
    Calc(CalcArgs),
    /// Print saturation properties at an absolute pressure
    Props {
        /// Absolute pressure in Pa
        pressure_pa: f64,
    },
    /// Blast distances for a given energy, without the energy balance
    Distance {
        /// Effective explosion energy in J
        #[arg(long)]
        energy: f64,
        /// Overpressure threshold in mbar (repeatable)
        #[arg(long = "threshold")]
        thresholds: Vec<f64>,
        /// Also report the overpressure reached at this distance in m
        #[arg(long)]
        at: Option<f64>,
    },
    /// Print the effective configuration as YAML
    Config,
}

#[derive(Args)]
struct CalcArgs {
    /// Inputs file (YAML, or JSON by extension); flags override its values
    #[arg(long)]
    inputs: Option<PathBuf>,
    /// Vessel volume in m³
    #[arg(long)]
    volume: Option<f64>,
    /// Liquid volume fraction (0, 1]
    #[arg(long)]
    liquid_fraction: Option<f64>,
    /// Rupture pressure above atmospheric in bar
    #[arg(long)]
    pressure_rel: Option<f64>,
    /// Surface factor Asb
    #[arg(long)]
    asb: Option<f64>,
    /// Comma-separated overpressure thresholds in mbar
    #[arg(long)]
    thresholds: Option<String>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
    /// Write results.json and CSV tables into this directory
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = resolve_config(&cli.engine)?;

    match cli.command {
        Commands::Calc(args) => cmd_calc(&config, &args),
        Commands::Props { pressure_pa } => cmd_props(&config, pressure_pa),
        Commands::Distance {
            energy,
            thresholds,
            at,
        } => cmd_distance(&config, energy, &thresholds, at),
        Commands::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
    }
}

/// Defaults, then the config file, then the environment, then flags.
fn resolve_config(args: &EngineArgs) -> AppResult<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    config.apply_env();
    if let Some(provider) = &args.provider {
        config.thermo.provider = provider.clone();
    }
    if let Some(url) = &args.api_url {
        config.thermo.api_base_url = url.clone();
    }
    config.validate()?;
    tracing::debug!(
        provider = config.thermo.kind().label(),
        base_url = %config.thermo.api_base_url,
        "resolved engine configuration"
    );
    Ok(config)
}

fn load_inputs(args: &CalcArgs) -> AppResult<CalculationInputs> {
    let mut inputs = match &args.inputs {
        Some(path) => CalculationInputs::load(path)?,
        None => CalculationInputs::default(),
    };
    if let Some(v) = args.volume {
        inputs.volume = v;
    }
    if let Some(v) = args.liquid_fraction {
        inputs.liquid_fraction = v;
    }
    if let Some(v) = args.pressure_rel {
        inputs.pressure_rel = v;
    }
    if let Some(v) = args.asb {
        inputs.asb = v;
    }
    if let Some(t) = &args.thresholds {
        inputs.thresholds = t.clone();
    }
    Ok(inputs)
}

fn cmd_calc(config: &EngineConfig, args: &CalcArgs) -> AppResult<()> {
    let inputs = load_inputs(args)?;
    let engine = Engine::from_config(config)?;
    let results = engine.calculate(&inputs)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }

    if let Some(dir) = &args.export {
        export(dir, &inputs, &results)?;
    }
    Ok(())
}

fn print_results(results: &CalculationResults) {
    println!("Calculation steps:");
    let width = results
        .calculation_steps
        .iter()
        .map(|s| s.description.chars().count())
        .max()
        .unwrap_or(0);
    for step in &results.calculation_steps {
        println!(
            "  {:<width$}  {} {}",
            step.description,
            step.value,
            step.unit,
            width = width
        );
    }

    println!();
    println!("Available energy: {:.3} MJ", results.available_energy / 1e6);
    println!("Effective energy: {:.3} MJ", results.effective_energy / 1e6);

    println!();
    println!("Effect distances ({METHOD_LABEL}):");
    for d in &results.distance_results {
        println!("  {:>8.1} mbar  {:>10.2} m", d.threshold, d.distance);
    }
    println!(
        "  Overpressure curve: {} points",
        results.overpressure_curve.len()
    );
}

fn export(dir: &Path, inputs: &CalculationInputs, results: &CalculationResults) -> AppResult<()> {
    let paths = write_report(dir, inputs, results)?;
    eprintln!("✓ Report written to {}", dir.display());
    for path in [&paths.json, &paths.steps, &paths.distances, &paths.curve] {
        eprintln!("  {}", path.display());
    }
    Ok(())
}

fn cmd_props(config: &EngineConfig, pressure_pa: f64) -> AppResult<()> {
    let provider = config.build_provider();
    let sat = provider.saturation(pa(pressure_pa))?;

    println!("Saturation properties ({})", provider.name());
    println!("  P      = {:.0} Pa", sat.pressure_pa());
    println!(
        "  T      = {:.2} K ({:.2} °C)",
        sat.temperature_k(),
        celsius(sat.t)
    );
    println!("  h_l    = {:.1} J/kg", sat.h_l);
    println!("  h_v    = {:.1} J/kg", sat.h_v);
    println!("  h_lv   = {:.1} J/kg", sat.h_lv());
    println!("  rho_l  = {:.3} kg/m³", sat.rho_l_kg_m3());
    println!("  rho_v  = {:.4} kg/m³", sat.rho_v_kg_m3());
    println!("  s_l    = {:.1} J/(kg·K)", sat.s_l);
    println!("  s_v    = {:.1} J/(kg·K)", sat.s_v);
    println!("  u_l    = {:.1} J/kg", sat.u_l);
    println!("  u_v    = {:.1} J/kg", sat.u_v);
    Ok(())
}

fn cmd_distance(
    config: &EngineConfig,
    energy: f64,
    thresholds: &[f64],
    at: Option<f64>,
) -> AppResult<()> {
    let model = config.blast_model();
    let energy = BlastModel::validate_energy(energy)?;
    if thresholds.is_empty() && at.is_none() {
        return Err(AppError::Validation(
            "give at least one --threshold or an --at distance".into(),
        ));
    }

    println!("Energy: {:.3} MJ ({METHOD_LABEL})", energy / 1e6);
    for d in model.distances(thresholds, energy) {
        println!("  {:>8.1} mbar  {:>10.2} m", d.threshold, d.distance);
    }
    if let Some(distance) = at {
        match model.overpressure_at(distance, energy) {
            Some(p) => println!("  at {distance:.2} m: {p:.1} mbar"),
            None => println!("  at {distance:.2} m: outside the calibrated range"),
        }
    }
    Ok(())
}
