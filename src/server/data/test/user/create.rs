use super::*;

/// Tests that creating a sales rep user also creates its profile.
///
/// Expected: Ok with a profile named after the username
#[tokio::test]
async fn creates_profile_for_sales_rep() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(new_user("Karim@Example.com", "karim", Role::SalesRep))
        .await?;

    assert_eq!(user.email, "karim@example.com");
    assert_eq!(user.role, Role::SalesRep);
    let profile = SalesRepRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!(profile.name, "karim");

    Ok(())
}

/// Tests that admins are created without a profile.
///
/// Expected: Ok with no sales rep profile
#[tokio::test]
async fn creates_admin_without_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(new_user("boss@example.com", "boss", Role::Admin))
        .await?;

    assert!(SalesRepRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a duplicate email is rejected by the unique index.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(new_user("same@example.com", "first", Role::Admin))
        .await?;
    let result = repo
        .create(new_user("same@example.com", "second", Role::Admin))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(repo.email_taken("SAME@example.com", None).await?);

    Ok(())
}
