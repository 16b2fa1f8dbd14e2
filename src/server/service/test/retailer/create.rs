use super::*;

/// Tests a retailer with valid references is created with related names.
///
/// Expected: Ok(Retailer) carrying the region, area and distributor names
#[tokio::test]
async fn creates_retailer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;
    let distributor = factory::distributor::create_distributor(db).await?;

    let retailer = RetailerService::new(db, &cache)
        .create(params(region.id, area.id, distributor.id))
        .await?;

    assert_eq!(retailer.region.name, region.name);
    assert_eq!(retailer.area.name, area.name);
    assert_eq!(retailer.distributor.name, distributor.name);
    assert!(retailer.sales_reps.is_empty());

    Ok(())
}

/// Tests an area from another region is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_area_outside_region() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let region = factory::region::create_region(db).await?;
    let other_region = factory::region::create_region(db).await?;
    let foreign_area = factory::area::create_area(db, other_region.id).await?;
    let distributor = factory::distributor::create_distributor(db).await?;

    let result = RetailerService::new(db, &cache)
        .create(params(region.id, foreign_area.id, distributor.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a territory from another area is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_territory_outside_area() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;
    let other_area = factory::area::create_area(db, region.id).await?;
    let territory = factory::territory::create_territory(db, other_area.id).await?;
    let distributor = factory::distributor::create_distributor(db).await?;

    let result = RetailerService::new(db, &cache)
        .create(RetailerParams {
            territory_id: Some(territory.id),
            ..params(region.id, area.id, distributor.id)
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a phone number already in use is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (region, area, distributor, existing) =
        factory::helpers::create_retailer_with_dependencies(db).await?;

    let result = RetailerService::new(db, &cache)
        .create(RetailerParams {
            phone: existing.phone.clone(),
            ..params(region.id, area.id, distributor.id)
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
