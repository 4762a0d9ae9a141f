//! Line-oriented I/O for the query tool.
//!
//! Input is a whitespace-separated token stream holding two count-prefixed
//! integer vectors: the keys to index, then the keys to query. Output is one
//! answer per query, in query order.

pub mod reader;
pub mod writer;

pub use reader::{read_batch, QueryBatch, TokenReader};
pub use writer::{write_answers, Answer};
