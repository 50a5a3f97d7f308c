use super::*;

/// Tests listing the students of a group with no members.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_group_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let _outsider = factory::create_student(db).await?;

    let repo = GroupRepository::new(db);
    let students = repo.students_of(group.id).await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests listing only the members of the requested group.
///
/// Expected: Ok with the single member
#[tokio::test]
async fn returns_only_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, group) = factory::create_student_in_group(db).await?;
    let _other = factory::create_student_in_group(db).await?;

    let repo = GroupRepository::new(db);
    let students = repo.students_of(group.id).await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, member.id);
    assert_eq!(students[0].email, member.email);

    Ok(())
}
