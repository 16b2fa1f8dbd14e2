use crate::server::{
    cache::sales_rep_namespace,
    data::assignment::AssignmentRepository,
    error::AppError,
    model::assignment::{BulkAction, BulkAssignParams},
    service::{assignment::AssignmentService, test::listing_cache},
};
use test_utils::{builder::TestBuilder, factory};

mod bulk;
