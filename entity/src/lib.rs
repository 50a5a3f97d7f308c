//! SeaORM entity models for the roster database.
//!
//! `student` and `group` are the two base tables; `student_group` is the
//! association table linking them many-to-many.

pub mod group;
pub mod prelude;
pub mod student;
pub mod student_group;
