//! Home transaction id sequence.

use std::sync::atomic::{AtomicU64, Ordering};

/// First id minted by a fresh process.
const SEQUENCE_START: u64 = 1_000_000;

/// Process-lifetime monotonic counter used to mint home transaction ids.
///
/// The backend pretends to book each accepted transfer into a ledger; the
/// minted id stands in for that booking's transaction number. Ids are
/// strictly increasing within one process run and are not persisted across
/// restarts, so there is no cross-run uniqueness guarantee.
#[derive(Debug)]
pub struct HomeTransactionSequence {
    next: AtomicU64,
}

impl HomeTransactionSequence {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(SEQUENCE_START),
        }
    }

    /// Mint the next home transaction id as a numeric string.
    ///
    /// Exactly one increment per call; the first call returns `"1000000"`.
    pub fn mint(&self) -> String {
        self.next.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

impl Default for HomeTransactionSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn first_mint_is_the_sequence_start() {
        let sequence = HomeTransactionSequence::new();
        assert_eq!(sequence.mint(), "1000000");
    }

    #[test]
    fn consecutive_mints_are_strictly_increasing() {
        let sequence = HomeTransactionSequence::new();
        let first: u64 = sequence.mint().parse().unwrap();
        let second: u64 = sequence.mint().parse().unwrap();
        let third: u64 = sequence.mint().parse().unwrap();
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn concurrent_mints_never_collide() {
        let sequence = Arc::new(HomeTransactionSequence::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let sequence = Arc::clone(&sequence);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| sequence.mint()).collect::<Vec<_>>()
            }));
        }

        let mut all: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
