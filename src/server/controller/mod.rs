//! HTTP request handlers for the roster API.
//!
//! Controllers extract and validate the request, hand it to the matching service and
//! convert the resulting domain model into its DTO. They hold no business logic.

pub mod group;
pub mod health;
pub mod student;

#[cfg(test)]
mod test;
