use orbsim::{bench_step, Scenario, ScenarioConfig, Universe};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orbsim", about = "Gravitational N-body simulator")]
struct Args {
    /// Scenario file; looked up under `scenarios/` if not an existing path
    #[arg(short, default_value = "earth_moon.yaml")]
    file_name: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Time `step` for growing system sizes instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// Print benchmark output as CSV
    #[arg(long, requires = "bench")]
    csv: bool,
}

fn resolve_scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = resolve_scenario_path(file_name);
    log::debug!("loading scenario from {}", config_path.display());
    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn report(step: u64, universe: &Universe, e0: Option<f64>) {
    let energy = universe.total_energy().ok();
    let drift = match (energy, e0) {
        (Some(e), Some(e0)) if e0 != 0.0 => format!("{:.3e}", (e - e0) / e0.abs()),
        _ => "n/a".to_string(),
    };
    log::info!(
        "step {:>8}  t = {:.3e} s  |p| = {:.6e} kg·m/s  energy drift = {}",
        step,
        universe.time(),
        universe.total_momentum().magnitude(),
        drift
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if args.bench {
        bench_step(&[100, 200, 400, 800, 1600, 3200], 3, args.csv)?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let e0 = scenario.universe.total_energy().ok();
    scenario
        .run(|step, universe| report(step, universe, e0))
        .context("simulation aborted")?;

    println!("{}", scenario.universe);

    Ok(())
}
