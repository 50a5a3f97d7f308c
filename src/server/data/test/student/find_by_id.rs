use super::*;

/// Tests finding a student that belongs to no group.
///
/// Expected: Ok(Some) with an empty group list
#[tokio::test]
async fn finds_student_without_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo.find_by_id(created.id).await?;

    assert!(student.is_some());
    let student = student.unwrap();
    assert_eq!(student.id, created.id);
    assert_eq!(student.email, created.email);
    assert!(student.groups.is_empty());

    Ok(())
}

/// Tests that the student is hydrated with its groups.
///
/// Creates memberships out of ID order to verify groups come back sorted by ID and
/// that groups the student is not in are excluded.
///
/// Expected: Ok(Some) with both member groups ordered by ID
#[tokio::test]
async fn includes_groups_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;
    let _other = factory::create_group(db).await?;

    factory::create_membership(db, student.id, second.id).await?;
    factory::create_membership(db, student.id, first.id).await?;

    let repo = StudentRepository::new(db);
    let found = repo.find_by_id(student.id).await?.unwrap();

    let group_ids: Vec<i32> = found.groups.iter().map(|g| g.id).collect();
    assert_eq!(group_ids, vec![first.id, second.id]);
    assert_eq!(found.groups[0].name, first.name);

    Ok(())
}

/// Tests finding a student that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.find_by_id(999).await?;

    assert!(student.is_none());

    Ok(())
}
