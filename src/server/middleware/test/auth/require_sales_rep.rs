use super::*;

/// Tests a sales rep gets its profile back.
///
/// Expected: Ok((User, SalesRep)) with the matching profile
#[tokio::test]
async fn returns_sales_rep_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let (user, profile) = factory::helpers::create_sales_rep_with_user(db).await?;
    let headers = bearer_headers(&keys, user.clone())?;

    let (caller, sales_rep) = AuthGuard::new(db, &keys, &headers)
        .require_sales_rep()
        .await?;

    assert_eq!(caller.id, user.id);
    assert_eq!(sales_rep.id, profile.id);
    assert_eq!(sales_rep.user_id, user.id);

    Ok(())
}

/// Tests a sales rep user without a profile is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_sales_rep_without_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::user::UserFactory::new(db)
        .role("SalesRep")
        .build()
        .await?;
    let headers = bearer_headers(&keys, user)?;

    let result = AuthGuard::new(db, &keys, &headers)
        .require_sales_rep()
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(_, message))) => {
            assert!(message.contains("profile"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an admin cannot use sales rep operations.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = admin(db).await?;
    let headers = bearer_headers(&keys, admin)?;

    let result = AuthGuard::new(db, &keys, &headers)
        .require_sales_rep()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
