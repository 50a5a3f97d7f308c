use super::*;

/// Tests listing students from an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests listing several students with their memberships.
///
/// Verifies students are ordered by ID and each carries only its own groups.
///
/// Expected: Ok with every student hydrated
#[tokio::test]
async fn returns_all_students_with_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, group) = factory::create_student_in_group(db).await?;
    let loner = factory::create_student(db).await?;
    let second_group = factory::create_group(db).await?;
    factory::create_membership(db, member.id, second_group.id).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, member.id);
    assert_eq!(students[1].id, loner.id);

    let group_ids: Vec<i32> = students[0].groups.iter().map(|g| g.id).collect();
    assert_eq!(group_ids, vec![group.id, second_group.id]);
    assert!(students[1].groups.is_empty());

    Ok(())
}
