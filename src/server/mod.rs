//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the roster service,
//! including API endpoints, business logic, data access, and infrastructure. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, payload validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and absence handling between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Logging, database connection and migrations, shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Utilities** (`util/`) - Database error classification
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates the payload, converts DTOs to params, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** returns domain model to controller, or a domain error for missing records
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
