//! Contains common text reading and writing logic.

mod text_reader;
pub(crate) use self::text_reader::*;

mod solution_reader;
pub use self::solution_reader::*;

mod text_writer;
pub use self::text_writer::*;
