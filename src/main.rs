use hfsim::{Scenario, ScenarioConfig};
use hfsim::{bench_update, run_2d, run_headless};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Explore the patterns a particle cloud settles into under a p_radial:p_tangential harmonic field")]
struct Args {
    /// Scenario file, relative to the `scenarios/` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the radial harmonic
    #[arg(long)]
    p_radial: Option<i32>,

    /// Override the tangential harmonic
    #[arg(long)]
    p_tangential: Option<i32>,

    /// Override the particle count
    #[arg(long)]
    particles: Option<usize>,

    /// Fix the initial layout
    #[arg(long)]
    seed: Option<u64>,

    /// Override the frame budget
    #[arg(long)]
    frames: Option<u32>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Time `update()` across cloud sizes and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&args.file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let mut cfg = ScenarioConfig::from_yaml_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    // Command line wins over the file
    if let Some(p) = args.p_radial {
        cfg.simulation.p_radial = p;
    }
    if let Some(p) = args.p_tangential {
        cfg.simulation.p_tangential = p;
    }
    if let Some(n) = args.particles {
        cfg.simulation.particle_count = n;
    }
    if args.seed.is_some() {
        cfg.simulation.seed = args.seed;
    }
    if let Some(frames) = args.frames {
        cfg.viewer.frames = frames;
    }
    if args.headless {
        cfg.viewer.headless = true;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.bench {
        bench_update()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if scenario.viewer.headless {
        run_headless(&mut scenario);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
