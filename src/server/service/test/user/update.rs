use super::*;

/// Tests renaming a sales rep user renames its profile.
///
/// Expected: Ok(User) and a profile carrying the new username
#[tokio::test]
async fn mirrors_username_onto_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let actor = admin(db).await?;
    let target = sales_rep_user(db).await?;

    service(db, &cache)
        .update(
            &actor,
            target.id,
            UpdateUserParams {
                username: Some("rahim.uddin".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let profile = entity::prelude::SalesRep::find()
        .filter(entity::sales_rep::Column::UserId.eq(target.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(profile.name, "rahim.uddin");

    Ok(())
}

/// Tests a regular admin cannot update another admin.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn regular_admin_cannot_update_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let actor = admin(db).await?;
    let target = admin(db).await?;

    assert_access_denied(
        service(db, &cache)
            .update(
                &actor,
                target.id,
                UpdateUserParams {
                    username: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .await,
    );

    Ok(())
}

/// Tests a regular admin cannot promote a sales rep to admin.
///
/// Expected: Err(AuthError::AccessDenied) and the role unchanged
#[tokio::test]
async fn regular_admin_cannot_grant_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let actor = admin(db).await?;
    let target = sales_rep_user(db).await?;
    let service = service(db, &cache);

    assert_access_denied(
        service
            .update(
                &actor,
                target.id,
                UpdateUserParams {
                    role: Some(Role::Admin),
                    ..Default::default()
                },
            )
            .await,
    );
    assert_eq!(service.get_by_id(target.id).await?.role, Role::SalesRep);

    Ok(())
}

/// Tests the super-admin can promote a sales rep, which removes the profile.
///
/// Expected: Ok(User) with role Admin and no profile left
#[tokio::test]
async fn superadmin_promotes_sales_rep() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let root = superadmin(db).await?;
    let target = sales_rep_user(db).await?;

    let updated = service(db, &cache)
        .update(
            &root,
            target.id,
            UpdateUserParams {
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.role, Role::Admin);
    assert_eq!(profile_count(db, target.id).await?, 0);

    Ok(())
}

/// Tests nobody but the super-admin may change the super-admin account.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn protects_superadmin_from_other_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let root = superadmin(db).await?;
    let actor = admin(db).await?;

    assert_access_denied(
        service(db, &cache)
            .update(
                &actor,
                root.id,
                UpdateUserParams {
                    password: Some("hijacked123".to_string()),
                    ..Default::default()
                },
            )
            .await,
    );

    Ok(())
}

/// Tests the super-admin keeps its role and email when updating itself.
///
/// Expected: Err(AppError::BadRequest) for both changes, Ok for a username change
#[tokio::test]
async fn superadmin_keeps_role_and_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let root = superadmin(db).await?;
    let service = service(db, &cache);

    let demote = service
        .update(
            &root,
            root.id,
            UpdateUserParams {
                role: Some(Role::SalesRep),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(demote, Err(AppError::BadRequest(_))));

    let move_email = service
        .update(
            &root,
            root.id,
            UpdateUserParams {
                email: Some("elsewhere@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(move_email, Err(AppError::BadRequest(_))));

    let renamed = service
        .update(
            &root,
            root.id,
            UpdateUserParams {
                username: Some("rootadmin".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(renamed.username, "rootadmin");

    Ok(())
}

/// Tests an unknown user ID is reported as missing.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let actor = admin(db).await?;

    let result = service(db, &cache)
        .update(&actor, 9999, UpdateUserParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
