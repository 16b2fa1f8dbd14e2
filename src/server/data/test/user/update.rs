use super::*;

/// Tests that a username change is mirrored onto the sales rep profile.
///
/// Expected: Ok(Some) and the profile renamed
#[tokio::test]
async fn mirrors_username_onto_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UserRecordChanges {
                username: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    let profile = SalesRepRepository::new(db)
        .find_by_id(sales_rep.id)
        .await?
        .unwrap();
    assert_eq!(profile.name, "renamed");

    Ok(())
}

/// Tests promoting a sales rep to admin.
///
/// Expected: profile and its assignments removed
#[tokio::test]
async fn removes_profile_when_role_becomes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;
    let (user, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;
    factory::create_assignment(db, sales_rep.id, retailer.id).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UserRecordChanges {
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.role, Role::Admin);
    assert!(SalesRepRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests demoting an admin to sales rep.
///
/// Expected: a profile named after the username is created
#[tokio::test]
async fn creates_profile_when_role_becomes_sales_rep() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db, "ops@example.com").await?;

    let repo = UserRepository::new(db);
    repo.update(
        admin.id,
        UserRecordChanges {
            role: Some(Role::SalesRep),
            ..Default::default()
        },
    )
    .await?;

    let profile = SalesRepRepository::new(db)
        .find_by_user_id(admin.id)
        .await?
        .unwrap();
    assert_eq!(profile.name, admin.username);

    Ok(())
}

/// Tests an update without any changes and an unknown user.
///
/// Expected: the user returned unchanged, None for the unknown ID
#[tokio::test]
async fn handles_empty_changes_and_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db, "noop@example.com").await?;

    let repo = UserRepository::new(db);
    let same = repo
        .update(admin.id, UserRecordChanges::default())
        .await?
        .unwrap();

    assert_eq!(same.email, "noop@example.com");
    assert!(repo
        .update(9999, UserRecordChanges::default())
        .await?
        .is_none());

    Ok(())
}
