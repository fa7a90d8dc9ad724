//! Diversified selection across source pools.
//!
//! Each non-empty pool is shuffled with the caller's generator, then a floor
//! pass guarantees a minimum per source and a round-robin fill pass spends the
//! remaining capacity one item per source at a time.
use crate::sources::ResolvedSources;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Limits applied to one label's selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionParams {
    /// Upper bound on the selection length; `None` selects every candidate.
    pub max_total: Option<usize>,
    /// Items guaranteed from each non-empty source before the fill pass.
    pub min_per_source: usize,
}

/// Remaining capacity; `None` means unbounded.
#[derive(Debug, Clone, Copy)]
struct Slots(Option<usize>);

impl Slots {
    fn exhausted(self) -> bool {
        self.0 == Some(0)
    }

    fn clamp(self, want: usize) -> usize {
        self.0.map_or(want, |slots| want.min(slots))
    }

    fn consume(&mut self, taken: usize) {
        if let Some(slots) = self.0.as_mut() {
            *slots = slots.saturating_sub(taken);
        }
    }
}

struct SourceQueue<'a> {
    source: &'a str,
    remaining: VecDeque<PathBuf>,
}

/// Select a bounded, deterministic, source-balanced list of paths.
///
/// Sources are visited in input order in both passes, so reordering the
/// specifiers changes the result even with the same seed.
pub fn select_diverse<R>(
    sources: &ResolvedSources,
    params: &SelectionParams,
    rng: &mut R,
) -> Vec<PathBuf>
where
    R: Rng + ?Sized,
{
    let mut queues: Vec<SourceQueue<'_>> = sources
        .pools()
        .iter()
        .filter(|pool| !pool.is_empty())
        .map(|pool| {
            let mut files = pool.files.clone();
            files.shuffle(rng);
            SourceQueue {
                source: &pool.source,
                remaining: files.into(),
            }
        })
        .collect();

    let mut selection = Vec::new();
    let mut slots = Slots(params.max_total);

    if params.min_per_source > 0 {
        for queue in &mut queues {
            if slots.exhausted() {
                break;
            }
            let take = slots.clamp(params.min_per_source.min(queue.remaining.len()));
            selection.extend(queue.remaining.drain(..take));
            slots.consume(take);
            tracing::debug!(source = queue.source, taken = take, "floor pass");
        }
    }

    'fill: while !slots.exhausted() {
        let mut made_progress = false;
        for queue in &mut queues {
            if slots.exhausted() {
                break 'fill;
            }
            if let Some(path) = queue.remaining.pop_front() {
                selection.push(path);
                slots.consume(1);
                made_progress = true;
            }
        }
        if !made_progress {
            break;
        }
    }

    tracing::info!(
        selected = selection.len(),
        candidates = sources.total_candidates(),
        max_total = ?params.max_total,
        min_per_source = params.min_per_source,
        "selection complete"
    );
    selection
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
