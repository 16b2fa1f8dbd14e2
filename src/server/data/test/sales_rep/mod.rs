use crate::server::{data::sales_rep::SalesRepRepository, model::user::UserFilter};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_user_id;
