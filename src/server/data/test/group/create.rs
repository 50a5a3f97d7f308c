use super::*;

/// Tests creating a group with a description.
///
/// Expected: Ok with group created and no students
#[tokio::test]
async fn creates_group_with_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParam {
            name: "G1".to_string(),
            description: Some("First years".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(group.name, "G1");
    assert_eq!(group.description, Some("First years".to_string()));
    assert!(group.students.is_empty());

    let db_group = entity::prelude::Group::find_by_id(group.id).one(db).await?;
    assert!(db_group.is_some());

    Ok(())
}

/// Tests creating a group without a description.
///
/// Expected: Ok with description stored as NULL
#[tokio::test]
async fn creates_group_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParam {
            name: "G2".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let db_group = entity::prelude::Group::find_by_id(group.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_group.description, None);

    Ok(())
}

/// Tests creating a group whose name is already taken.
///
/// Expected: Err(DomainError::Conflict) on the name field
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).name("G1").build().await?;

    let repo = GroupRepository::new(db);
    let result = repo
        .create(CreateGroupParam {
            name: "G1".to_string(),
            description: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::Conflict {
            kind: EntityKind::Group,
            field: "name",
        }))
    ));

    let count = entity::prelude::Group::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
