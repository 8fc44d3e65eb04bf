//! Ingestion of the NEO catalog and close-approach files
//!
//! - `load_neos`: CSV with columns `pdes`, `name`, `diameter`, `pha`
//! - `load_approaches`: JSON `{ "fields": [...], "data": [[...], ...] }`
//!   with columns `des`, `cd`, `dist`, `v_rel`
//!
//! Both readers return plain records in file order. Linking happens in
//! `Dataset::build`.

mod approaches;
mod errors;
mod neos;

pub use approaches::{load_approaches, read_approaches};
pub use errors::{ExtractError, ExtractResult};
pub use neos::{load_neos, read_neos};
