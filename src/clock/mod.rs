//! Time triple arithmetic: unit normalization, duration adds and formatting.
//!
//! Everything in here is pure and total. Callers own their triples and
//! replace them with the values these functions return.

pub mod duration;
pub mod input;
pub mod normalize;
pub mod triple;

pub use duration::add_duration;
pub use input::coerce_raw;
pub use normalize::{Unit, normalize};
pub use triple::{TimeTriple, format_unit};
