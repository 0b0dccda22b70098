use affect_core::{DecisionRecord, EmotionDistribution};
use serde::Serialize;

/// Everything reported for one scenario run.
#[derive(Debug, Serialize)]
pub struct ScenarioReport<'a> {
    pub scenario: &'a str,
    pub title: &'a str,
    pub face_input: &'a EmotionDistribution,
    pub voice_input: &'a EmotionDistribution,
    pub decision: &'a DecisionRecord,
    pub fused: &'a EmotionDistribution,
    pub dominant: Option<&'a str>,
}

/// Render a report for humans on the console.
pub fn print_human(report: &ScenarioReport<'_>) -> serde_json::Result<()> {
    println!();
    println!("--- Running Scenario: {} ---", report.title);
    println!("Face Input: {}", serde_json::to_string(report.face_input)?);
    println!("Voice Input: {}", serde_json::to_string(report.voice_input)?);
    println!(
        "Decision Log: {}",
        serde_json::to_string_pretty(report.decision)?
    );
    println!(
        "Fused Result: {}",
        serde_json::to_string_pretty(report.fused)?
    );
    if let Some(dominant) = report.dominant {
        println!("Dominant Emotion: {dominant}");
    }
    Ok(())
}

/// Emit the whole report as one pretty-printed JSON document.
pub fn print_json(report: &ScenarioReport<'_>) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
