//! User data repository for database operations.
//!
//! A user with the `SalesRep` role owns exactly one sales rep profile. Every write here keeps
//! that rule: profiles are created, renamed and deleted in the same transaction as the user
//! row they belong to.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::{
    data::lower_like,
    error::AppError,
    model::{
        pagination::{like_pattern, Page},
        user::{NewUserRecord, Role, User, UserFilter, UserRecordChanges},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of users ordered by ID, optionally filtered by username or email.
    ///
    /// # Arguments
    /// - `filter` - Page request and optional search term
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Requested page with total count
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::Internal)` - A stored role could not be parsed
    pub async fn get_paginated(&self, filter: &UserFilter) -> Result<Page<User>, AppError> {
        let mut query = entity::prelude::User::find();
        if let Some(search) = &filter.search {
            let pattern = like_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(lower_like("users", "username", &pattern))
                    .add(lower_like("users", "email", &pattern)),
            );
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, filter.page.limit);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(filter.page.index())
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(users, total, filter.page))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email. Emails are stored lowercased.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks whether a user other than `exclude_id` already has the email.
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Creates a user, and its sales rep profile when the role is `SalesRep`.
    ///
    /// # Arguments
    /// - `record` - Email, username, password hash and role of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error; nothing was created
    pub async fn create(&self, record: NewUserRecord) -> Result<User, AppError> {
        let txn = self.db.begin().await?;

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(record.email.to_lowercase()),
            username: ActiveValue::Set(record.username.clone()),
            password_hash: ActiveValue::Set(record.password_hash),
            role: ActiveValue::Set(record.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if record.role == Role::SalesRep {
            create_profile(&txn, entity.id, record.username).await?;
        }

        txn.commit().await?;

        User::from_entity(entity)
    }

    /// Applies column changes to a user and brings its sales rep profile in line.
    ///
    /// A user ending up with the `SalesRep` role gets a profile if it has none, and its
    /// profile name follows the username. A user ending up as `Admin` loses its profile and
    /// the profile's assignments.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error (nothing changed) or unparsable stored role
    pub async fn update(
        &self,
        id: i32,
        changes: UserRecordChanges,
    ) -> Result<Option<User>, AppError> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::User::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut active = entity.clone().into_active_model();
        if let Some(email) = changes.email {
            active.email = ActiveValue::Set(email.to_lowercase());
        }
        if let Some(username) = changes.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(role) = changes.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        let entity = if active.is_changed() {
            active.update(&txn).await?
        } else {
            entity
        };
        let user = User::from_entity(entity)?;

        let profile = entity::prelude::SalesRep::find()
            .filter(entity::sales_rep::Column::UserId.eq(id))
            .one(&txn)
            .await?;

        match (user.role, profile) {
            (Role::SalesRep, Some(profile)) if profile.name != user.username => {
                let mut profile = profile.into_active_model();
                profile.name = ActiveValue::Set(user.username.clone());
                profile.update(&txn).await?;
            }
            (Role::SalesRep, None) => {
                create_profile(&txn, user.id, user.username.clone()).await?;
            }
            (Role::Admin, Some(profile)) => {
                delete_profile(&txn, profile.id).await?;
            }
            _ => {}
        }

        txn.commit().await?;

        Ok(Some(user))
    }

    /// Deletes a user together with its sales rep profile and assignments.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let profile = entity::prelude::SalesRep::find()
            .filter(entity::sales_rep::Column::UserId.eq(id))
            .one(&txn)
            .await?;
        if let Some(profile) = profile {
            delete_profile(&txn, profile.id).await?;
        }

        let result = entity::prelude::User::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn create_profile<C: ConnectionTrait>(db: &C, user_id: i32, name: String) -> Result<(), DbErr> {
    entity::sales_rep::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set(name),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

async fn delete_profile<C: ConnectionTrait>(db: &C, sales_rep_id: i32) -> Result<(), DbErr> {
    entity::prelude::SalesRepRetailer::delete_many()
        .filter(entity::sales_rep_retailer::Column::SalesRepId.eq(sales_rep_id))
        .exec(db)
        .await?;
    entity::prelude::SalesRep::delete_by_id(sales_rep_id)
        .exec(db)
        .await?;

    Ok(())
}
