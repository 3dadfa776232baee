use super::{render_board, save_prediction};
use crate::history::HistoryStore;
use anyhow::{bail, Result};
use serde_json::json;
use stakecast_games::{
    ChickenDifficulty, ChickenPredictor, CrashPredictor, DicePredictor, FlipPredictor,
    KenoPredictor, LimboPredictor, MinesPredictor, SeedPair, WheelPredictor, WheelRisk,
};

pub async fn mines(store: &HistoryStore, seeds: SeedPair, mine_count: u8) -> Result<()> {
    let prediction = MinesPredictor::new(mine_count)?.predict(&seeds)?;

    println!(
        "Mines prediction ({} mines, {} safe cells):",
        prediction.mine_count,
        prediction.safe_cells.len()
    );
    println!();
    print!("{}", render_board(&prediction.safe_cells, prediction.grid_cells, 5));
    println!();
    println!("Reproducible for client seed '{}' and server seed '{}'.", seeds.client_seed, seeds.server_seed);

    save_prediction(
        store,
        "mines",
        &seeds,
        Some(json!({ "mine_count": mine_count })),
        &prediction,
    )
    .await
}

pub async fn keno(store: &HistoryStore, seeds: SeedPair) -> Result<()> {
    let prediction = KenoPredictor::new().predict(&seeds)?;

    let numbers = prediction
        .lucky_numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Keno lucky numbers: {}", numbers);

    save_prediction(store, "keno", &seeds, None, &prediction).await
}

pub async fn dice(store: &HistoryStore, seeds: SeedPair) -> Result<()> {
    let prediction = DicePredictor::new().predict(&seeds)?;

    println!("Dice prediction:");
    println!("  Result: {:.2}", prediction.result);
    println!("  Zone: {}", prediction.zone);
    println!("  Multiplier: {:.2}x", prediction.multiplier);
    println!("  Confidence (display only): {:.1}%", prediction.confidence);

    save_prediction(store, "dice", &seeds, None, &prediction).await
}

pub async fn limbo(store: &HistoryStore, seeds: SeedPair) -> Result<()> {
    let prediction = LimboPredictor::new().predict(&seeds)?;

    println!("Limbo prediction:");
    println!("  Multiplier: {:.2}x", prediction.multiplier);
    println!("  Recommended target: {:.2}x", prediction.target_multiplier);
    println!("  Risk: {}", prediction.risk.as_str());
    println!("  Confidence (display only): {:.1}%", prediction.confidence);

    save_prediction(store, "limbo", &seeds, None, &prediction).await
}

pub async fn flip(store: &HistoryStore, seeds: SeedPair) -> Result<()> {
    let prediction = FlipPredictor::new().predict(&seeds)?;

    println!("Coin flip prediction: {}", prediction.outcome);
    println!("  Raw fraction: {:.1}%", prediction.probability);
    println!("  Confidence (display only): {:.1}%", prediction.confidence);

    save_prediction(store, "flip", &seeds, None, &prediction).await
}

pub async fn wheel(store: &HistoryStore, seeds: SeedPair, risk: &str, segments: u32) -> Result<()> {
    let risk = parse_wheel_risk(risk)?;
    let prediction = WheelPredictor::new(risk, segments)?.predict(&seeds)?;

    println!("Wheel prediction:");
    println!(
        "  Winning segment: {} of {}",
        prediction.segment, prediction.total_segments
    );
    println!("  Multiplier: {:.2}x", prediction.multiplier);
    println!("  Confidence (display only): {:.1}%", prediction.confidence);

    save_prediction(
        store,
        "wheel",
        &seeds,
        Some(json!({ "risk": risk.as_str(), "segments": segments })),
        &prediction,
    )
    .await
}

pub async fn crash(store: &HistoryStore, seeds: SeedPair) -> Result<()> {
    let prediction = CrashPredictor::new().predict(&seeds)?;

    println!("Crash prediction:");
    println!("  Crash point: {:.2}x", prediction.crash_point);
    println!("  Safe exit: {:.2}x", prediction.safe_exit);
    println!("  Confidence (display only): {:.1}%", prediction.confidence);

    save_prediction(store, "crash", &seeds, None, &prediction).await
}

pub async fn chicken(store: &HistoryStore, seeds: SeedPair, difficulty: &str) -> Result<()> {
    let difficulty = parse_chicken_difficulty(difficulty)?;
    let prediction = ChickenPredictor::new(difficulty).predict(&seeds)?;

    println!(
        "Chicken prediction ({}, {} cells, {} bones):",
        difficulty.as_str(),
        prediction.grid_cells,
        prediction.bones
    );
    println!();
    print!(
        "{}",
        render_board(
            &prediction.safe_cells,
            prediction.grid_cells,
            difficulty.columns()
        )
    );

    save_prediction(
        store,
        "chicken",
        &seeds,
        Some(json!({ "difficulty": difficulty.as_str() })),
        &prediction,
    )
    .await
}

fn parse_wheel_risk(input: &str) -> Result<WheelRisk> {
    match input {
        "low" => Ok(WheelRisk::Low),
        "medium" => Ok(WheelRisk::Medium),
        "high" => Ok(WheelRisk::High),
        other => bail!("unknown wheel risk '{other}' (expected low, medium or high)"),
    }
}

fn parse_chicken_difficulty(input: &str) -> Result<ChickenDifficulty> {
    match input {
        "easy" => Ok(ChickenDifficulty::Easy),
        "medium" => Ok(ChickenDifficulty::Medium),
        "hard" => Ok(ChickenDifficulty::Hard),
        "expert" => Ok(ChickenDifficulty::Expert),
        other => bail!("unknown difficulty '{other}' (expected easy, medium, hard or expert)"),
    }
}
