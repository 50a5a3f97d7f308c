//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .email("ann@x.com")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First {id}"`
    /// - last_name: `"Last {id}"`
    /// - email: `"student{id}@example.com"`
    ///
    /// where id is auto-incremented.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            email: format!("student{}@example.com", id),
        }
    }

    /// Sets the student's first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the student's last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the student's e-mail address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - The created student entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
