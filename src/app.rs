//! Query runner: read both vectors, build the set, answer every query.

use std::io::{Read, Write};

use tracing::info;

use crate::config::FixedSetConfig;
use crate::data_structures::perfect_hash_set::{PerfectHashSet, PerfectHashSetStats};
use crate::error::FixedSetResult;
use crate::io::{read_batch, write_answers, Answer};

/// What a run did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Statistics of the set that answered the queries
    pub stats: PerfectHashSetStats,
    /// Number of queries answered
    pub queries: usize,
    /// Number of queries answered with "present"
    pub hits: usize,
}

/// Builds a set from the data vector in `input` and writes one answer per
/// query vector entry to `output`.
pub fn run_queries<R: Read, W: Write>(
    input: R,
    output: W,
    config: &FixedSetConfig,
) -> FixedSetResult<RunSummary> {
    let batch = read_batch(input)?;
    info!(
        data = batch.data.len(),
        queries = batch.queries.len(),
        "input read"
    );

    let mut factory = config.hash_set.factory();
    let mut set = PerfectHashSet::with_config(config.hash_set.structure_config());
    set.initialize(&batch.data, &mut factory)?;
    let stats = set.stats();
    info!(
        keys = stats.len,
        slots = stats.slot_count,
        top_level_attempts = stats.top_level_attempts,
        "set built"
    );

    let answers: Vec<Answer> = batch
        .queries
        .iter()
        .map(|&value| Answer {
            value,
            present: set.contains(value),
        })
        .collect();
    write_answers(output, &answers, config.output.format)?;

    let hits = answers.iter().filter(|answer| answer.present).count();
    Ok(RunSummary {
        stats,
        queries: answers.len(),
        hits,
    })
}
