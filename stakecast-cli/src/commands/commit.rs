use anyhow::Result;
use stakecast_games::{generate_server_seed, SeedCommitment};

/// Publish a commitment digest for a server seed, generating the seed when
/// none is supplied.
pub async fn commit(server_seed: Option<String>) -> Result<()> {
    let (seed, generated) = match server_seed {
        Some(seed) => (seed, false),
        None => (generate_server_seed(), true),
    };

    let commitment = SeedCommitment::commit(&seed);

    if generated {
        println!("Generated server seed: {}", seed);
        println!("Keep it secret until the round is over.");
    }
    println!("Commitment digest: {}", commitment.digest);
    println!();
    println!("Note: this commits to the seed string only. It does not make");
    println!("the draw distribution provably fair.");

    Ok(())
}

/// Check a revealed server seed against a published digest.
pub async fn verify(digest: &str, server_seed: &str) -> Result<()> {
    let commitment = SeedCommitment::from_digest(digest)?;

    if commitment.verify(server_seed) {
        println!("OK: seed matches the published commitment.");
    } else {
        println!("MISMATCH: seed does not match the published commitment.");
        std::process::exit(1);
    }

    Ok(())
}
