use super::*;

/// Tests deleting a retailer also drops its sales reps' cached pages.
///
/// Expected: Ok(()) with the retailer gone and the cache entry removed
#[tokio::test]
async fn deletes_retailer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;
    let (_, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;
    factory::assignment::create_assignment(db, sales_rep.id, retailer.id).await?;
    let key = format!("{}page", sales_rep_namespace(sales_rep.id));
    cache.insert(key.clone(), "{}".to_string()).await;

    let service = RetailerService::new(db, &cache);
    service.delete(retailer.id).await?;

    assert!(matches!(
        service.get_by_id(retailer.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(cache.get(&key).await.is_none());

    Ok(())
}

/// Tests deleting an unknown retailer is reported as missing.
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

    let result = RetailerService::new(db, &cache).delete(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
