use crate::{
    model::category::CategoryKind,
    server::{data::category::CategoryRepository, model::category::CreateCategoryParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod get_all;
mod get_by_id;
