use crate::server::{data::assignment::AssignmentRepository, model::assignment::AssignOutcome};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
