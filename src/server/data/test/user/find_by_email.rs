use super::*;

/// Tests that email lookups ignore case.
///
/// Expected: Ok(Some) for a differently cased email
#[tokio::test]
async fn finds_user_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db, "lead@example.com").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("LEAD@example.com").await?.unwrap();

    assert_eq!(found.id, admin.id);
    assert_eq!(found.role, Role::Admin);
    assert!(repo.find_by_email("ghost@example.com").await?.is_none());

    Ok(())
}
