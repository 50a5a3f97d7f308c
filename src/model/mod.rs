//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON request and response bodies. Request DTOs carry
//! `validator` rules for the field constraints of the data model; all DTOs derive
//! `ToSchema` for the OpenAPI document.

pub mod api;
pub mod group;
pub mod student;
