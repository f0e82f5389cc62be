//! suifeatures - typed field references, stable field sorting, and small
//! feature showcases
//!
//! - `projection`: sort records by a reusable field reference
//! - `record`: typed and dynamic-named records
//! - `shape`: shapes returned behind an abstract interface
//! - `capitalize`: values transformed on assignment
//! - `observability`: structured JSON logging
//! - `cli`: command-line front end

pub mod capitalize;
pub mod cli;
pub mod observability;
pub mod projection;
pub mod record;
pub mod shape;
