//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Generated names and e-mail addresses are made unique with
//! a shared counter so that the unique constraints on `students.email` and `groups.name`
//! never collide between factory calls.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let student = factory::create_student(&db).await?;
//!     let group = factory::create_group(&db).await?;
//!     factory::create_membership(&db, student.id, group.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .first_name("Ann")
//!     .last_name("Lee")
//!     .email("ann@x.com")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `student` - Create student entities
//! - `group` - Create group entities
//! - `student_group` - Create membership rows
//! - `helpers` - Unique id generation and entities created with their dependencies

pub mod group;
pub mod helpers;
pub mod student;
pub mod student_group;

pub use group::create_group;
pub use helpers::create_student_in_group;
pub use student::create_student;
pub use student_group::create_membership;
