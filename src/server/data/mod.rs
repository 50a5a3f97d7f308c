//! Database repository layer for students, groups and their memberships.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from the business logic layer. They report absence as
//! `None`/`false` and leave turning it into an error to the services.

pub mod group;
pub mod membership;
pub mod student;

#[cfg(test)]
mod test;
