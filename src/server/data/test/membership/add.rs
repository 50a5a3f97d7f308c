use super::*;

/// Tests adding a student to a group.
///
/// Expected: Ok(true) with membership row stored
#[tokio::test]
async fn adds_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let group = factory::create_group(db).await?;

    let repo = MembershipRepository::new(db);
    let added = repo.add(student.id, group.id).await?;

    assert!(added);
    let row = entity::prelude::StudentGroup::find_by_id((student.id, group.id))
        .one(db)
        .await?;
    assert!(row.is_some());

    Ok(())
}

/// Tests adding a membership that already exists.
///
/// The add is idempotent: it reports success and no duplicate row appears.
///
/// Expected: Ok(true) with a single membership row
#[tokio::test]
async fn is_idempotent_for_existing_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, group) = factory::create_student_in_group(db).await?;

    let repo = MembershipRepository::new(db);
    let added = repo.add(student.id, group.id).await?;

    assert!(added);
    let count = entity::prelude::StudentGroup::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests adding a missing student to an existing group.
///
/// Expected: Ok(false) with no row stored
#[tokio::test]
async fn returns_false_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = MembershipRepository::new(db);
    let added = repo.add(999, group.id).await?;

    assert!(!added);
    let count = entity::prelude::StudentGroup::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests adding an existing student to a missing group.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = MembershipRepository::new(db);

    assert!(!repo.add(student.id, 999).await?);

    Ok(())
}
