//! Domain primitives shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the id and timestamp
//! aliases, the domain error type, the three-state [`patch::Patch`] field
//! used by partial updates, and input validation helpers.

pub mod error;
pub mod patch;
pub mod types;
pub mod validation;
