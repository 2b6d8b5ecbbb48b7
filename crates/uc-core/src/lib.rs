//! uc-core: stable foundation for unitconv.
//!
//! Contains:
//! - ids (compact IDs for units and quantities)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{UcError, UcResult};
pub use ids::*;
pub use numeric::*;
