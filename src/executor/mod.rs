//! Query execution subsystem for neodb
//!
//! Streams linked approaches that satisfy a predicate, then optionally caps
//! the stream.
//!
//! # Execution Flow (strict order)
//!
//! 1. Walk the dataset's canonical approach sequence
//! 2. Test each approach against the predicate
//! 3. Yield matches one at a time
//! 4. Stop pulling once the limit is reached
//!
//! # Invariants
//!
//! - Nothing is evaluated before the consumer asks for it
//! - Matches come out in canonical (chronological) order
//! - The same predicate over the same dataset yields the same sequence
//! - A limit of `None` or `Some(0)` leaves the stream unbounded

mod limit;
mod query;

pub use limit::{limit, Limit};
pub use query::{query, Query, QueryStats};
