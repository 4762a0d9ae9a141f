//! Writer for query answers.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::data_structures::perfect_hash_set::Key;
use crate::error::FixedSetResult;

/// One query and its membership result, as written in JSON mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// The queried key
    pub value: Key,
    /// Whether the key is in the set
    pub present: bool,
}

/// Writes one answer per line in the requested format.
pub fn write_answers<W: Write>(
    mut out: W,
    answers: &[Answer],
    format: OutputFormat,
) -> FixedSetResult<()> {
    for answer in answers {
        match format {
            OutputFormat::YesNo => {
                let line: &[u8] = if answer.present { b"Yes\n" } else { b"No\n" };
                out.write_all(line)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, answer)?;
                out.write_all(b"\n")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
