//! Seeded random walks for producing start states.
//!
//! Walks never immediately undo their previous move (the domain's reversal
//! pruning does that), so short walks rarely collapse back onto the start.

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use quarry_search::SearchState;

/// How the scrambled state is picked from the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrambleMode {
    /// The state the walk ends on.
    #[default]
    EndOfWalk,
    /// The state with the largest heuristic estimate seen along the walk
    /// (earliest one on ties).
    Hardest,
}

impl ScrambleMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EndOfWalk => "end_of_walk",
            Self::Hardest => "hardest",
        }
    }
}

impl FromStr for ScrambleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "end_of_walk" | "end" => Ok(Self::EndOfWalk),
            "hardest" => Ok(Self::Hardest),
            other => Err(format!("unknown scramble mode '{other}'")),
        }
    }
}

/// Take up to `steps` random legal moves from `start`.
///
/// Stops early if a state has no legal moves.
pub fn random_walk<S, R>(start: &S, steps: usize, mode: ScrambleMode, rng: &mut R) -> S
where
    S: SearchState,
    R: Rng + ?Sized,
{
    let mut current = start.clone();
    let mut previous: Option<S::Action> = None;
    let mut hardest = (current.estimate_goal_distance(), current.clone());

    for _ in 0..steps {
        let actions: Vec<S::Action> = current
            .available_actions(previous.as_ref())
            .into_iter()
            .collect();
        let Some(action) = actions.choose(rng) else {
            break;
        };
        current = current.apply(action);
        previous = Some(action.clone());

        let estimate = current.estimate_goal_distance();
        if mode == ScrambleMode::Hardest && estimate > hardest.0 {
            hardest = (estimate, current.clone());
        }
    }

    match mode {
        ScrambleMode::EndOfWalk => current,
        ScrambleMode::Hardest => hardest.1,
    }
}

/// [`random_walk`] driven by a fresh `StdRng` seeded with `seed`.
///
/// The same seed, start and step count always give the same state.
pub fn scramble<S: SearchState>(start: &S, steps: usize, mode: ScrambleMode, seed: u64) -> S {
    let mut rng = StdRng::seed_from_u64(seed);
    let scrambled = random_walk(start, steps, mode, &mut rng);
    tracing::debug!(
        seed,
        steps,
        mode = mode.as_str(),
        estimate = scrambled.estimate_goal_distance(),
        "scrambled start state"
    );
    scrambled
}
