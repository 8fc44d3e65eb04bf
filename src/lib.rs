//! neodb - An indexed, queryable catalog of near-Earth objects
//!
//! Loads a catalog of near-Earth objects and their close approaches to
//! Earth, links the two, and answers lookups and filtered queries.
//!
//! - `model`: objects, approach events, timestamps
//! - `catalog`: the linked, immutable dataset and its lookups
//! - `filter`: criteria and attribute predicates
//! - `executor`: lazy queries and result limiting
//! - `extract` / `write`: file ingestion and result serialization
//! - `cli`: the `neodb` command line
//! - `observability`: structured logging

pub mod catalog;
pub mod cli;
pub mod executor;
pub mod extract;
pub mod filter;
pub mod model;
pub mod observability;
pub mod write;
