use crate::server::{
    data::bug::BugRepository,
    model::bug::{CreateBugParam, UpdateBugParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod update;
