use super::*;

/// Tests creating a new student.
///
/// Verifies that the repository inserts the student row, assigns an ID and returns
/// the student with no groups.
///
/// Expected: Ok with student created
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParam {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(student.first_name, "Ann");
    assert_eq!(student.last_name, "Lee");
    assert_eq!(student.email, "ann@x.com");
    assert!(student.groups.is_empty());

    let db_student = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?;
    assert!(db_student.is_some());
    assert_eq!(db_student.unwrap().email, "ann@x.com");

    Ok(())
}

/// Tests creating a student with an e-mail already in use.
///
/// Verifies that the unique constraint violation is reported as a conflict on the
/// e-mail field and that no second row is stored.
///
/// Expected: Err(DomainError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .email("ann@x.com")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .create(CreateStudentParam {
            first_name: "Other".to_string(),
            last_name: "Person".to_string(),
            email: "ann@x.com".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::Conflict {
            kind: EntityKind::Student,
            field: "email",
        }))
    ));

    let count = entity::prelude::Student::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that each created student receives a distinct ID.
///
/// Expected: Ok with increasing IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let first = repo
        .create(CreateStudentParam {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
        })
        .await
        .unwrap();
    let second = repo
        .create(CreateStudentParam {
            first_name: "Bob".to_string(),
            last_name: "Ray".to_string(),
            email: "bob@x.com".to_string(),
        })
        .await
        .unwrap();

    assert!(second.id > first.id);

    Ok(())
}
