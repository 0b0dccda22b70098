mod output;
mod scenarios;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{debug, info};

use affect_core::config::{validate_or_error, AffectConfig};
use affect_core::traits::{IEmotionDetector, IFusionEngine};
use affect_core::EmotionDistribution;
use affect_detect::MockDetector;
use affect_fusion::FusionEngine;

use output::ScenarioReport;
use scenarios::{Scenario, SCENARIOS};

/// Demonstration driver for face/voice emotion fusion
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a single scenario by id (see --list-scenarios)
    #[arg(short, long)]
    scenario: Option<String>,

    /// Emit each report as a single JSON document
    #[arg(long)]
    json: bool,

    /// List available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration first so the configured log level can apply
    let config = match &args.config {
        Some(path) => AffectConfig::load(path)?,
        None => AffectConfig::default(),
    };
    validate_or_error(&config)?;

    // Initialize logging
    let log_level = if args.verbose {
        "debug".to_string()
    } else {
        config.observability.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Handle --list-scenarios
    if args.list_scenarios {
        return list_scenarios_and_exit();
    }

    info!("Affect driver starting...");

    let engine = FusionEngine::with_config(config.fusion);
    let face_detector = MockDetector::face();
    let voice_detector = MockDetector::voice();

    match &args.scenario {
        Some(id) => {
            let scenario = match scenarios::find(id) {
                Some(scenario) => scenario,
                None => bail!("unknown scenario {id:?}; try --list-scenarios"),
            };
            run_scenario(scenario, &face_detector, &voice_detector, &engine, args.json)?;
        }
        None => {
            for scenario in &SCENARIOS {
                run_scenario(scenario, &face_detector, &voice_detector, &engine, args.json)?;
            }
        }
    }

    info!("All scenarios complete");
    Ok(())
}

fn run_scenario(
    scenario: &Scenario,
    face_detector: &MockDetector,
    voice_detector: &MockDetector,
    engine: &FusionEngine,
    json: bool,
) -> Result<()> {
    debug!(scenario = scenario.id, "running scenario");

    face_detector.set_result(scenario.face_input());
    voice_detector.set_result(scenario.voice_input());

    let face = observe(face_detector);
    let voice = observe(voice_detector);

    let (fused, decision) = engine.fuse(&face, &voice)?;
    let dominant = fused.dominant().map(|(label, _)| label);

    let report = ScenarioReport {
        scenario: scenario.id,
        title: scenario.title,
        face_input: &face,
        voice_input: &voice,
        decision: &decision,
        fused: &fused,
        dominant,
    };

    if json {
        output::print_json(&report)?;
    } else {
        output::print_human(&report)?;
    }

    Ok(())
}

/// Sample one detector and log what it produced.
fn observe(detector: &dyn IEmotionDetector) -> EmotionDistribution {
    let distribution = detector.detect();
    debug!(
        detector = detector.name(),
        modality = %detector.modality(),
        confidence = distribution.confidence(),
        "detector sampled"
    );
    distribution
}

fn list_scenarios_and_exit() -> Result<()> {
    println!("Available scenarios:\n");
    for scenario in &SCENARIOS {
        println!("  {} - {}", scenario.id, scenario.title);
        println!("      {}", scenario.summary);
    }
    Ok(())
}
