use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ListingCache, config::Config, error::AppError, service::user::UserService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up-to-date before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured super-admin account when it does not exist yet.
///
/// # Arguments
/// - `db` - Migrated database connection
/// - `cache` - Listing cache, required by the user service
/// - `config` - Super-admin email, password and username plus the bcrypt cost
pub async fn seed_superadmin(
    db: &DatabaseConnection,
    cache: &ListingCache,
    config: &Config,
) -> Result<(), AppError> {
    UserService::new(
        db,
        cache,
        config.superadmin_email.as_deref(),
        config.bcrypt_cost,
    )
    .ensure_superadmin(
        config.superadmin_password.as_deref(),
        &config.superadmin_username,
    )
    .await
}
