use sea_orm::entity::prelude::*;

/// A student record (`students`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub last_name: String,
    #[sea_orm(column_type = "String(StringLen::N(200))", unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_group::Entity")]
    StudentGroup,
}

impl Related<super::student_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentGroup.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_group::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_group::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
