use super::*;

/// Tests finding a group together with its members.
///
/// Expected: Ok(Some) with members ordered by student ID
#[tokio::test]
async fn finds_group_with_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    factory::create_membership(db, second.id, group.id).await?;
    factory::create_membership(db, first.id, group.id).await?;

    let repo = GroupRepository::new(db);
    let found = repo.find_by_id(group.id).await?.unwrap();

    assert_eq!(found.name, group.name);
    let student_ids: Vec<i32> = found.students.iter().map(|s| s.id).collect();
    assert_eq!(student_ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests finding a group that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.find_by_id(999).await?;

    assert!(group.is_none());

    Ok(())
}
