use super::*;

/// Tests listing the group IDs of a student.
///
/// Expected: IDs of the student's groups in ascending order
#[tokio::test]
async fn lists_group_ids_of_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;
    factory::create_membership(db, student.id, second.id).await?;
    factory::create_membership(db, student.id, first.id).await?;

    let repo = MembershipRepository::new(db);
    let group_ids = repo.group_ids_of(student.id).await?;

    assert_eq!(group_ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing the student IDs of a group.
///
/// Expected: IDs of the group's members only
#[tokio::test]
async fn lists_student_ids_of_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, group) = factory::create_student_in_group(db).await?;
    let _other = factory::create_student_in_group(db).await?;

    let repo = MembershipRepository::new(db);
    let student_ids = repo.student_ids_of(group.id).await?;

    assert_eq!(student_ids, vec![member.id]);

    Ok(())
}
