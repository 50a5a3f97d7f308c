use super::*;

/// Tests listing groups from an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let groups = repo.get_all().await?;

    assert!(groups.is_empty());

    Ok(())
}

/// Tests listing groups with members spread across them.
///
/// A student in two groups must appear in both; an empty group has no students.
///
/// Expected: Ok with every group hydrated and ordered by ID
#[tokio::test]
async fn returns_all_groups_with_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, first) = factory::create_student_in_group(db).await?;
    let second = factory::create_group(db).await?;
    let empty = factory::create_group(db).await?;
    factory::create_membership(db, student.id, second.id).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.get_all().await?;

    let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
    assert_eq!(group_ids, vec![first.id, second.id, empty.id]);
    assert_eq!(groups[0].students.len(), 1);
    assert_eq!(groups[0].students[0].id, student.id);
    assert_eq!(groups[1].students[0].id, student.id);
    assert!(groups[2].students.is_empty());

    Ok(())
}
