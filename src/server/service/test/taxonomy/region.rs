use super::*;

/// Tests region names are unique regardless of case.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    factory::region::RegionFactory::new(db)
        .name("Dhaka")
        .build()
        .await?;

    let result = RegionService::new(db, &cache)
        .create(RegionParams {
            name: "DHAKA".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a region with areas cannot be deleted.
///
/// Expected: Err(AppError::BadRequest) mentioning the area count
#[tokio::test]
async fn refuses_to_delete_referenced_region() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let region = factory::region::create_region(db).await?;
    factory::area::create_area(db, region.id).await?;

    let result = RegionService::new(db, &cache).delete(region.id).await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("1 area")),
        other => panic!("Expected BadRequest, got: {:?}", other),
    }

    Ok(())
}

/// Tests renaming a region drops every cached listing page.
///
/// Expected: Ok(Region) with the cache emptied
#[tokio::test]
async fn rename_invalidates_all_listings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let region = factory::region::create_region(db).await?;
    let key = format!("{}page", sales_rep_namespace(3));
    cache.insert(key.clone(), "{}".to_string()).await;

    let renamed = RegionService::new(db, &cache)
        .update(
            region.id,
            RegionParams {
                name: "Chattogram".to_string(),
            },
        )
        .await?;

    assert_eq!(renamed.name, "Chattogram");
    assert!(cache.get(&key).await.is_none());

    Ok(())
}

/// Tests updating an unknown region is reported as missing.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_region() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let result = RegionService::new(db, &cache)
        .update(
            12,
            RegionParams {
                name: "Rajshahi".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
