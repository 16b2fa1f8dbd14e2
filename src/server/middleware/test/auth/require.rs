use super::*;

/// Tests an admin passes an admin-only check.
///
/// Expected: Ok(User) with the admin's ID and role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = admin(db).await?;
    let headers = bearer_headers(&keys, admin.clone())?;

    let user = AuthGuard::new(db, &keys, &headers)
        .require(&[Role::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests a sales rep is denied an admin-only operation.
///
/// Expected: Err(AuthError::AccessDenied) naming the sales rep's user ID
#[tokio::test]
async fn denies_sales_rep_on_admin_operation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let (user, _) = factory::helpers::create_sales_rep_with_user(db).await?;
    let headers = bearer_headers(&keys, user.clone())?;

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Role::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("Admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests any listed role is accepted.
///
/// Expected: Ok(User) for a sales rep when both roles are allowed
#[tokio::test]
async fn accepts_any_listed_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let (user, _) = factory::helpers::create_sales_rep_with_user(db).await?;
    let headers = bearer_headers(&keys, user)?;

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Role::Admin, Role::SalesRep])
        .await?;

    assert_eq!(result.role, Role::SalesRep);

    Ok(())
}

/// Tests the role is read from the database rather than the token.
///
/// Verifies that a token issued while the user was an admin stops granting admin access
/// once the stored role changes.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn uses_current_role_from_database() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = admin(db).await?;
    let headers = bearer_headers(&keys, admin.clone())?;

    let mut active: entity::user::ActiveModel = admin.into();
    active.role = sea_orm::ActiveValue::Set("SalesRep".to_string());
    sea_orm::ActiveModelTrait::update(active, db).await?;

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Role::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Role::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a non-bearer Authorization scheme is treated as missing.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = headers_with("Basic YWRtaW46cGFzc3dvcmQ=")?;

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_signed_with_other_secret() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = admin(db).await?;
    let headers = bearer_headers(&TokenKeys::new("another-secret", 3600), admin)?;

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Role::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token for a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the deleted user's ID
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = admin(db).await?;
    let admin_id = admin.id;
    let headers = bearer_headers(&keys, admin)?;
    entity::prelude::User::delete_by_id(admin_id).exec(db).await?;

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Role::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, admin_id);
        }
        other => panic!("Expected UserNotInDatabase error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an empty role list admits any authenticated user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_role_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let (user, _) = factory::helpers::create_sales_rep_with_user(db).await?;
    let headers = bearer_headers(&keys, user.clone())?;

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}
