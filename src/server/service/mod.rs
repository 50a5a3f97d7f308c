//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Absence handling**: Turning the repositories' `None`/`false` results into domain errors
//! - **Orchestration**: Coordinating multiple repository calls, as the student transfer does
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod group;
pub mod student;
