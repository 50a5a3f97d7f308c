use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::{
        domain::{DomainError, EntityKind},
        AppError,
    },
    model::student::{CreateStudentParam, Student},
};

/// Student operations over the shared connection pool.
pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new StudentService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student; a taken e-mail surfaces as a conflict
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        let student = repo.create(param).await?;

        tracing::info!("Created student {} <{}>", student.id, student.email);

        Ok(student)
    }

    /// Gets a student by ID with its groups
    pub async fn get_by_id(&self, id: i32) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or_else(|| {
            DomainError::NotFound {
                kind: EntityKind::Student,
                id,
            }
            .into()
        })
    }

    /// Gets all students ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Deletes a student and its memberships, returning a confirmation message
    pub async fn delete(&self, id: i32) -> Result<String, AppError> {
        let repo = StudentRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(DomainError::NotFound {
                kind: EntityKind::Student,
                id,
            }
            .into());
        }

        tracing::info!("Deleted student {}", id);

        Ok("Student deleted successfully".to_string())
    }
}
