//! A tiny, line-driven manager for virtual classrooms.
//!
//! The operator types one command per line (`add_classroom Math`,
//! `add_student S1 Math`, ...) and gets one message back. Commands are parsed
//! into a typed [`Command`] by the [`parser`] module and executed by the
//! [`Interpreter`], which owns the [`ClassroomDirectory`] and all entities
//! reachable from it.
//!
//! The domain modules ([`model`], [`directory`], [`enrollment`],
//! [`assignment`]) are public so the rules can be exercised without going
//! through text at all.

pub mod assignment;
pub mod directory;
pub mod enrollment;
mod interpreter;
pub mod model;
pub mod outcome;
pub mod parser;

pub use directory::ClassroomDirectory;
/// Just a convenient re-export of the line-driven command runner.
///
/// See [`Interpreter`] for the high-level API.
pub use interpreter::{Interpreter, Step};
pub use outcome::{Outcome, Rejection, Report};
pub use parser::{Command, ParsingError};
