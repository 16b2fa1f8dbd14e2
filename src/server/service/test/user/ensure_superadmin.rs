use super::*;

/// Tests the super-admin is created once when configured.
///
/// Expected: Ok(()) with exactly one admin with the configured email after two runs
#[tokio::test]
async fn creates_superadmin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();
    let service = service(db, &cache);

    service
        .ensure_superadmin(Some("supersecret"), "admin")
        .await?;
    service
        .ensure_superadmin(Some("supersecret"), "admin")
        .await?;

    let users = entity::prelude::User::find()
        .filter(entity::user::Column::Email.eq(SUPERADMIN_EMAIL))
        .all(db)
        .await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, "Admin");
    assert_eq!(users[0].username, "admin");

    Ok(())
}

/// Tests nothing is created without a configured password.
///
/// Expected: Ok(()) with no users
#[tokio::test]
async fn skips_without_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    service(db, &cache).ensure_superadmin(None, "admin").await?;

    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
