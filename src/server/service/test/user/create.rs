use super::*;

/// Tests an admin can create a sales rep user, which gets a profile.
///
/// Expected: Ok(User) with one sales rep profile
#[tokio::test]
async fn creates_sales_rep_with_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let actor = admin(db).await?;
    let user = service(db, &cache)
        .create(&actor, create_params("rep@example.com", Role::SalesRep))
        .await?;

    assert_eq!(user.role, Role::SalesRep);
    assert_ne!(user.password_hash, "password123");
    assert_eq!(profile_count(db, user.id).await?, 1);

    Ok(())
}

/// Tests only the super-admin can create admin users.
///
/// Expected: Err(AuthError::AccessDenied) for a regular admin, Ok for the super-admin
#[tokio::test]
async fn only_superadmin_creates_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let regular = admin(db).await?;
    let root = superadmin(db).await?;
    let service = service(db, &cache);

    assert_access_denied(
        service
            .create(&regular, create_params("second@example.com", Role::Admin))
            .await,
    );

    let created = service
        .create(&root, create_params("second@example.com", Role::Admin))
        .await?;
    assert_eq!(created.role, Role::Admin);
    assert_eq!(profile_count(db, created.id).await?, 0);

    Ok(())
}

/// Tests a duplicate email is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let actor = admin(db).await?;
    let existing = sales_rep_user(db).await?;

    let result = service(db, &cache)
        .create(&actor, create_params(&existing.email, Role::SalesRep))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
