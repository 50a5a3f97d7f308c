use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_student_table::Student;
use super::m20250301_000002_create_group_table::Group;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentGroup::Table)
                    .if_not_exists()
                    .col(integer(StudentGroup::StudentId))
                    .col(integer(StudentGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .name("pk_student_group_association")
                            .col(StudentGroup::StudentId)
                            .col(StudentGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group_association_student_id")
                            .from(StudentGroup::Table, StudentGroup::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group_association_group_id")
                            .from(StudentGroup::Table, StudentGroup::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentGroup {
    #[sea_orm(iden = "student_group_association")]
    Table,
    StudentId,
    GroupId,
}
