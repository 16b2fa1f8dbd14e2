//! Assignment factory linking sales reps to retailers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns a retailer to a sales rep.
///
/// # Arguments
/// - `db` - Database connection
/// - `sales_rep_id` - Sales rep receiving the retailer
/// - `retailer_id` - Retailer being assigned
///
/// # Returns
/// - `Ok(entity::sales_rep_retailer::Model)` - Created assignment row
/// - `Err(DbErr)` - Database error during insert, including duplicate pairs
pub async fn create_assignment(
    db: &DatabaseConnection,
    sales_rep_id: i32,
    retailer_id: i32,
) -> Result<entity::sales_rep_retailer::Model, DbErr> {
    entity::sales_rep_retailer::ActiveModel {
        sales_rep_id: ActiveValue::Set(sales_rep_id),
        retailer_id: ActiveValue::Set(retailer_id),
        assigned_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
