use super::*;

use test_utils::factory::user::DEFAULT_PASSWORD;

/// Tests login with the right password issues a token for the user.
///
/// Expected: Ok with a token whose subject is the user's ID
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = factory::user::create_admin(db, "admin@example.com").await?;

    let (token, user) = AuthService::new(db, &keys)
        .login("admin@example.com", DEFAULT_PASSWORD.to_string())
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(keys.verify(&token)?.sub, admin.id);

    Ok(())
}

/// Tests the login email is matched ignoring case and surrounding whitespace.
///
/// Expected: Ok for " Admin@Example.COM "
#[tokio::test]
async fn matches_email_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    factory::user::create_admin(db, "admin@example.com").await?;

    let result = AuthService::new(db, &keys)
        .login(" Admin@Example.COM ", DEFAULT_PASSWORD.to_string())
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a wrong password and an unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_wrong_password_and_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    factory::user::create_admin(db, "admin@example.com").await?;
    let service = AuthService::new(db, &keys);

    let wrong_password = service
        .login("admin@example.com", "not-the-password".to_string())
        .await;
    let unknown_email = service
        .login("nobody@example.com", DEFAULT_PASSWORD.to_string())
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
