//! Asynchronous board composition.
//!
//! Finalizing a board goes through an explicit pending → ready step with
//! a bounded simulated latency, standing in for the generation work a
//! real deployment would do. The caller renders a "composing" notice
//! until the future resolves; nothing is queued behind it.

use std::time::Duration;

use rand::Rng;
use rand::rngs::SmallRng;

use vb_core::{Board, BoardError, Question, SelectionSet};

/// Latency bounds for the simulated composition step, in milliseconds.
pub const MIN_DELAY_MS: u64 = 400;
pub const MAX_DELAY_MS: u64 = 1200;

/// Draw a composition delay within the fixed bounds.
pub fn composition_delay(rng: &mut SmallRng) -> Duration {
    Duration::from_millis(rng.random_range(MIN_DELAY_MS..=MAX_DELAY_MS))
}

/// Compose the board: wait out the simulated latency, then finalize.
/// The finalize itself is synchronous and deterministic; only the delay
/// is asynchronous.
pub async fn compose_board(
    questions: &[Question],
    selections: &SelectionSet,
    rng: &mut SmallRng,
) -> Result<Board, BoardError> {
    let delay = composition_delay(rng);
    tracing::debug!("composing board, ready in {}ms", delay.as_millis());
    tokio::time::sleep(delay).await;
    vb_core::finalize(questions, selections)
}
