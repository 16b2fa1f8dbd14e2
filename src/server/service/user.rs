//! User management and super-admin seeding.
//!
//! The super-admin is the user whose email equals `SUPERADMIN_EMAIL`. Only the super-admin may
//! create, promote or delete admins and only it may change its own account. Other admins
//! manage sales rep users.

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ListingCache,
    data::{sales_rep::SalesRepRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        pagination::Page,
        user::{
            CreateUserParams, NewUserRecord, Role, UpdateUserParams, User, UserFilter,
            UserRecordChanges,
        },
    },
    service::auth::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
    superadmin_email: Option<&'a str>,
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a ListingCache,
        superadmin_email: Option<&'a str>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            db,
            cache,
            superadmin_email,
            bcrypt_cost,
        }
    }

    pub async fn get_paginated(&self, filter: UserFilter) -> Result<Page<User>, AppError> {
        UserRepository::new(self.db).get_paginated(&filter).await
    }

    /// Gets a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a user; a `SalesRep` user gets its sales rep profile in the same transaction.
    ///
    /// # Access Control
    /// - Any admin may create `SalesRep` users
    /// - Only the super-admin may create `Admin` users
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::AuthErr(AccessDenied))` - Non-super-admin creating an admin
    /// - `Err(AppError::BadRequest)` - Email already in use
    pub async fn create(&self, actor: &User, params: CreateUserParams) -> Result<User, AppError> {
        if params.role == Role::Admin && !self.is_superadmin(actor) {
            return Err(denied(actor, "Only the super-admin can create admin users"));
        }

        let repo = UserRepository::new(self.db);
        if repo.email_taken(&params.email, None).await? {
            return Err(duplicate_email());
        }

        let password_hash = hash_password(params.password, self.bcrypt_cost).await?;
        let user = repo
            .create(NewUserRecord {
                email: params.email,
                username: params.username,
                password_hash,
                role: params.role,
            })
            .await
            .map_err(|e| match e {
                AppError::DbErr(e) => AppError::from_unique_violation(e, "Email already exists"),
                e => e,
            })?;

        tracing::info!("User {} created {} user {}", actor.id, user.role, user.id);

        Ok(user)
    }

    /// Applies a partial update to a user.
    ///
    /// # Access Control
    /// - The super-admin account can only be changed by the super-admin itself, which keeps
    ///   its email and the `Admin` role
    /// - The super-admin may update any other user
    /// - Other admins may only update `SalesRep` users and may not grant the `Admin` role
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor may not make this change
    /// - `Err(AppError::BadRequest)` - Email in use, or a forbidden super-admin change
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        let target = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if self.is_superadmin(&target) {
            if actor.id != target.id {
                return Err(denied(
                    actor,
                    "Only the super-admin can change the super-admin account",
                ));
            }
            if params.role == Some(Role::SalesRep) {
                return Err(AppError::BadRequest(
                    "The super-admin must keep the Admin role".to_string(),
                ));
            }
            if params
                .email
                .as_deref()
                .is_some_and(|email| !email.eq_ignore_ascii_case(&target.email))
            {
                return Err(AppError::BadRequest(
                    "The super-admin email cannot be changed".to_string(),
                ));
            }
        } else if !self.is_superadmin(actor) {
            if target.role != Role::SalesRep {
                return Err(denied(actor, "Admins can only update sales rep users"));
            }
            if params.role == Some(Role::Admin) {
                return Err(denied(actor, "Only the super-admin can grant the Admin role"));
            }
        }

        if let Some(email) = &params.email {
            if repo.email_taken(email, Some(id)).await? {
                return Err(duplicate_email());
            }
        }

        let password_hash = match params.password {
            Some(password) => Some(hash_password(password, self.bcrypt_cost).await?),
            None => None,
        };

        let profile = SalesRepRepository::new(self.db).find_by_user_id(id).await?;
        let renamed = params
            .username
            .as_ref()
            .is_some_and(|username| *username != target.username);
        let promoted = params.role == Some(Role::Admin) && target.role == Role::SalesRep;

        let user = repo
            .update(
                id,
                UserRecordChanges {
                    email: params.email,
                    username: params.username,
                    password_hash,
                    role: params.role,
                },
            )
            .await
            .map_err(|e| match e {
                AppError::DbErr(e) => AppError::from_unique_violation(e, "Email already exists"),
                e => e,
            })?
            .ok_or_else(|| not_found(id))?;

        // Rep names are embedded in every cached page listing the rep's retailers.
        if let Some(profile) = profile {
            if renamed || promoted {
                self.cache.invalidate_all_listings().await;
            } else {
                self.cache.invalidate_sales_rep(profile.id).await;
            }
        }

        tracing::info!("User {} updated user {}", actor.id, user.id);

        Ok(user)
    }

    /// Deletes a user with its sales rep profile and assignments.
    ///
    /// # Access Control
    /// - The super-admin cannot be deleted and nobody can delete their own account
    /// - Only the super-admin may delete admins
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor may not delete this user
    /// - `Err(AppError::BadRequest)` - Actor tried to delete itself
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let target = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if self.is_superadmin(&target) {
            return Err(denied(actor, "The super-admin cannot be deleted"));
        }
        if target.id == actor.id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }
        if target.role == Role::Admin && !self.is_superadmin(actor) {
            return Err(denied(actor, "Only the super-admin can delete admin users"));
        }

        let profile = SalesRepRepository::new(self.db).find_by_user_id(id).await?;

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        if profile.is_some() {
            self.cache.invalidate_all_listings().await;
        }

        tracing::info!("User {} deleted user {}", actor.id, id);

        Ok(())
    }

    /// Creates the super-admin account when it is configured but missing.
    ///
    /// Logs a warning when no admin exists afterwards, since nobody could then manage users.
    ///
    /// # Arguments
    /// - `password` - `SUPERADMIN_PASSWORD`; seeding is skipped when unset
    /// - `username` - Username given to a newly created super-admin
    ///
    /// # Returns
    /// - `Ok(())` - Seeding finished or was not needed
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn ensure_superadmin(
        &self,
        password: Option<&str>,
        username: &str,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        match (self.superadmin_email, password) {
            (Some(email), Some(password)) => match repo.find_by_email(email).await? {
                Some(existing) if existing.role != Role::Admin => {
                    tracing::warn!(
                        "Super-admin account {} exists with role {}",
                        existing.id,
                        existing.role
                    );
                }
                Some(_) => {}
                None => {
                    let password_hash =
                        hash_password(password.to_string(), self.bcrypt_cost).await?;
                    let user = repo
                        .create(NewUserRecord {
                            email: email.to_string(),
                            username: username.to_string(),
                            password_hash,
                            role: Role::Admin,
                        })
                        .await?;

                    tracing::info!("Created super-admin account {}", user.id);
                }
            },
            (Some(_), None) => {
                tracing::warn!("SUPERADMIN_EMAIL is set without SUPERADMIN_PASSWORD");
            }
            _ => {}
        }

        if !repo.admin_exists().await? {
            tracing::warn!("No admin user exists; set SUPERADMIN_EMAIL and SUPERADMIN_PASSWORD");
        }

        Ok(())
    }

    fn is_superadmin(&self, user: &User) -> bool {
        user.is_predefined_admin(self.superadmin_email)
    }
}

fn denied(actor: &User, reason: &str) -> AppError {
    AuthError::AccessDenied(actor.id, reason.to_string()).into()
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

fn duplicate_email() -> AppError {
    AppError::BadRequest("Email already exists".to_string())
}
