//! Harness runner: scramble, solve, verify by replay, report.
//!
//! # Pipeline
//!
//! ```text
//! World::solved() → scramble(seed) → solve(algorithm)
//!   → replay(actions) → goal check → RunReport (JSON + digest)
//! ```
//!
//! The report body is deterministic: for a given world, configuration and
//! seed, two runs produce byte-identical JSON and the same digest. Wall-clock
//! timing is logged but never written into the report.

use std::path::Path;
use std::time::Instant;

use sha2::{Digest, Sha256};

use quarry_search::path::replay;
use quarry_search::{
    solve, Algorithm, CancelToken, ProgressProbe, SearchContext, SearchPolicy, SolveOutcome,
    StateEvaluator,
};

use crate::contract::PuzzleWorld;
use crate::error::HarnessError;
use crate::scramble::{scramble, ScrambleMode};

/// Everything that determines a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub seed: u64,
    pub scramble_steps: usize,
    pub scramble_mode: ScrambleMode,
    pub policy: SearchPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            seed: 1,
            scramble_steps: 200,
            scramble_mode: ScrambleMode::EndOfWalk,
            policy: SearchPolicy::default(),
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "seed": self.seed,
            "scramble_steps": self.scramble_steps,
            "scramble_mode": self.scramble_mode.as_str(),
            "policy": self.policy.to_json_value(),
        })
    }
}

/// Result of one harness run.
#[derive(Debug, Clone)]
pub struct RunReport<A> {
    pub world_id: String,
    pub config: RunConfig,
    /// Row-major tiles of the start state.
    pub initial_tiles: Vec<u8>,
    pub outcome: SolveOutcome<A>,
}

impl<A: quarry_search::SearchAction> RunReport<A> {
    /// # Errors
    ///
    /// Returns the serializer error if the outcome digest cannot be computed.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        Ok(serde_json::json!({
            "world_id": self.world_id,
            "config": self.config.to_json_value(),
            "initial_tiles": self.initial_tiles,
            "outcome": self.outcome.to_json_value(),
            "outcome_digest": self.outcome.digest()?,
        }))
    }

    /// Compact JSON with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value()?)
    }

    /// `sha256:<hex>` digest of the canonical report.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(format!("sha256:{}", hex::encode(Sha256::digest(&bytes))))
    }

    /// Write the canonical report to `path`, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Json`] or [`HarnessError::Io`].
    pub fn write_json(&self, path: &Path) -> Result<(), HarnessError> {
        let mut bytes = self.to_canonical_json_bytes()?;
        bytes.push(b'\n');
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Solve `initial` with the configured algorithm and verify the answer.
///
/// A solved outcome is replayed from `initial`; the last replayed state must
/// satisfy the goal test.
///
/// # Errors
///
/// Returns [`HarnessError::Search`] for an invalid policy and
/// [`HarnessError::ReplayMismatch`] if the returned path does not reach a
/// goal.
pub fn run_from<W: PuzzleWorld>(
    initial: &W,
    config: &RunConfig,
    probe: &dyn ProgressProbe,
    cancel: Option<CancelToken>,
) -> Result<RunReport<W::Action>, HarnessError> {
    let mut ctx: SearchContext<'_, W> = SearchContext::new(&StateEvaluator)
        .with_probe(probe)
        .with_policy(config.policy.clone());
    if let Some(token) = cancel {
        ctx = ctx.with_cancel(token);
    }

    let world_id = initial.world_id();
    tracing::info!(
        world = %world_id,
        algorithm = config.algorithm.as_str(),
        estimate = initial.estimate_goal_distance(),
        "solve started"
    );
    let started = Instant::now();
    let outcome = solve(config.algorithm, initial, &ctx)?;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if outcome.is_solved() {
        let visited = replay(initial, &outcome.actions);
        if !visited.last().is_some_and(|last| last.is_goal()) {
            return Err(HarnessError::ReplayMismatch);
        }
    }

    tracing::info!(
        world = %world_id,
        algorithm = config.algorithm.as_str(),
        termination = outcome.termination.as_str(),
        cost = outcome.cost(),
        expansions = outcome.stats.expansions,
        elapsed_ms,
        "solve finished"
    );

    Ok(RunReport {
        world_id,
        config: config.clone(),
        initial_tiles: initial.tiles(),
        outcome,
    })
}

/// Scramble `W::solved()` per `config`, then [`run_from`] the result.
///
/// # Errors
///
/// Same as [`run_from`].
pub fn run_scrambled<W: PuzzleWorld>(
    config: &RunConfig,
    probe: &dyn ProgressProbe,
    cancel: Option<CancelToken>,
) -> Result<RunReport<W::Action>, HarnessError> {
    let initial = scramble(
        &W::solved(),
        config.scramble_steps,
        config.scramble_mode,
        config.seed,
    );
    run_from(&initial, config, probe, cancel)
}
