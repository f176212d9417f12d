use solsim::{Scenario, ScenarioConfig, KeyEdges, MoveOutcome};
use solsim::run_2d;
use solsim::{bench_gravity, bench_frame_curve};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`; falls back to the built-in setup
    /// when the file does not exist
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Step without opening a window
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Print gravity and frame timings instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    if !config_path.exists() {
        log::warn!("{} not found, using the built-in scenario", config_path.display());
        return Ok(ScenarioConfig::default());
    }

    let file = File::open(&config_path)
        .with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, frames: u64) {
    let mut blocked = 0u64;
    for _ in 0..frames {
        let report = scenario.step(KeyEdges::default());
        if let MoveOutcome::Blocked { .. } = report.player {
            blocked += 1;
        }
        if scenario.system.frame % u64::from(scenario.engine.fps) == 0 {
            let p = scenario.camera_target();
            log::info!("frame {}: player at ({:.2}, {:.2})", scenario.system.frame, p.x, p.y);
        }
    }

    log::info!("headless run finished after {} frames, player blocked on {blocked}", scenario.system.frame);
    for b in &scenario.system.bodies {
        log::info!("  {:<10} x = ({:10.3}, {:10.3})  v = ({:8.4}, {:8.4})", b.name, b.x.x, b.x.y, b.v.x, b.v.y);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        bench_gravity();
        bench_frame_curve();
        return Ok(());
    }

    // Bevy installs its own logger, only headless needs one here
    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        run_headless(scenario, args.frames);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
