use super::*;

/// Tests a sales rep can read an assigned retailer.
///
/// Expected: Ok(Retailer)
#[tokio::test]
async fn returns_assigned_retailer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;
    let sales_rep = sales_rep(db).await?;
    factory::assignment::create_assignment(db, sales_rep.id, retailer.id).await?;

    let result = SalesRepService::new(db, &cache)
        .get_assigned(&sales_rep, retailer.id)
        .await?;

    assert_eq!(result.id, retailer.id);
    assert_eq!(result.sales_reps.len(), 1);

    Ok(())
}

/// Tests a sales rep cannot read a retailer assigned to someone else.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_unassigned_retailer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;
    let owner = sales_rep(db).await?;
    let intruder = sales_rep(db).await?;
    factory::assignment::create_assignment(db, owner.id, retailer.id).await?;

    let result = SalesRepService::new(db, &cache)
        .get_assigned(&intruder, retailer.id)
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, intruder.user_id);
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an unknown retailer is reported as missing rather than forbidden.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_retailer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let sales_rep = sales_rep(db).await?;

    let result = SalesRepService::new(db, &cache)
        .get_assigned(&sales_rep, 9999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
