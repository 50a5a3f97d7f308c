use crate::server::{
    data::student::StudentRepository,
    error::{
        domain::{DomainError, EntityKind},
        AppError,
    },
    model::student::CreateStudentParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
