use crate::server::data::membership::MembershipRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod ids_of;
mod remove;
