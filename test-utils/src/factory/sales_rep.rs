//! Sales rep factory for creating test sales rep profiles.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating sales rep profiles attached to an existing user.
pub struct SalesRepFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
}

impl<'a> SalesRepFactory<'a> {
    /// Creates a new SalesRepFactory for the given user.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - User owning the profile
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Sales Rep {}", next_id()),
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the sales rep entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::sales_rep::Model)` - Created profile
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::sales_rep::Model, DbErr> {
        entity::sales_rep::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sales rep profile with a default name for the given user.
pub async fn create_sales_rep(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::sales_rep::Model, DbErr> {
    SalesRepFactory::new(db, user_id).build().await
}
