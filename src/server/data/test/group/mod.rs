use crate::server::{
    data::group::GroupRepository,
    error::{
        domain::{DomainError, EntityKind},
        AppError,
    },
    model::group::CreateGroupParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
mod students_of;
