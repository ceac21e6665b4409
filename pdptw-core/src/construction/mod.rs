//! The construction module contains logic to create starting solutions.

mod initial;
pub use self::initial::*;
