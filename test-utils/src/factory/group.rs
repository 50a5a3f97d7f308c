//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::group::GroupFactory;
///
/// let group = GroupFactory::new(&db)
///     .name("G1")
///     .description(None)
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Group {id}"` where id is auto-incremented
    /// - description: `Some("Test group")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Group {}", id),
            description: Some("Test group".to_string()),
        }
    }

    /// Sets the group name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the group description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::group::Model)` - The created group entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
