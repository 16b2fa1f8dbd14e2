//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used across all factory modules and convenience methods for
//! creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a retailer together with the region, area and distributor it references.
///
/// All entities are created with default values. Use the individual factories to customize
/// specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((region, area, distributor, retailer))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_retailer_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::region::Model,
        entity::area::Model,
        entity::distributor::Model,
        entity::retailer::Model,
    ),
    DbErr,
> {
    let region = crate::factory::region::create_region(db).await?;
    let area = crate::factory::area::create_area(db, region.id).await?;
    let distributor = crate::factory::distributor::create_distributor(db).await?;
    let retailer =
        crate::factory::retailer::create_retailer(db, region.id, area.id, distributor.id).await?;

    Ok((region, area, distributor, retailer))
}

/// Creates a user with the `SalesRep` role and its sales rep profile.
///
/// The profile name mirrors the username.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, sales_rep))` - The created user and profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_sales_rep_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::sales_rep::Model), DbErr> {
    let user = crate::factory::user::UserFactory::new(db)
        .role("SalesRep")
        .build()
        .await?;
    let sales_rep = crate::factory::sales_rep::SalesRepFactory::new(db, user.id)
        .name(user.username.clone())
        .build()
        .await?;

    Ok((user, sales_rep))
}
