//! Input/output helpers.
//!
//! - `.ini` measurement parsing (`ini`)
//! - input directory discovery (`scan`)
//! - report and JSON exports (`export`)

pub mod export;
pub mod ini;
pub mod scan;

pub use export::*;
pub use ini::*;
pub use scan::*;
