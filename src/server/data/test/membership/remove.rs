use super::*;

/// Tests removing an existing membership.
///
/// Expected: Ok(true) and the student and group rows are untouched
#[tokio::test]
async fn removes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, group) = factory::create_student_in_group(db).await?;

    let repo = MembershipRepository::new(db);
    let removed = repo.remove(student.id, group.id).await?;

    assert!(removed);
    assert!(repo.student_ids_of(group.id).await?.is_empty());
    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Group::find_by_id(group.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests removing a membership that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_not_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let group = factory::create_group(db).await?;

    let repo = MembershipRepository::new(db);

    assert!(!repo.remove(student.id, group.id).await?);

    Ok(())
}

/// Tests that removing one membership leaves the student's other memberships intact.
///
/// Expected: Ok(true) with the other membership still present
#[tokio::test]
async fn leaves_other_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, group) = factory::create_student_in_group(db).await?;
    let other = factory::create_group(db).await?;
    factory::create_membership(db, student.id, other.id).await?;

    let repo = MembershipRepository::new(db);
    assert!(repo.remove(student.id, group.id).await?);

    assert_eq!(repo.group_ids_of(student.id).await?, vec![other.id]);

    Ok(())
}
