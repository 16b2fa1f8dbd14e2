use super::*;

/// Tests an unused distributor can be deleted.
///
/// Expected: Ok(()) and a second delete reporting NotFound
#[tokio::test]
async fn deletes_unused_distributor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let distributor = factory::distributor::create_distributor(db).await?;
    let service = DistributorService::new(db, &cache);

    service.delete(distributor.id).await?;

    assert!(matches!(
        service.delete(distributor.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests renaming to another distributor's name is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_rename_to_existing_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let existing = factory::distributor::create_distributor(db).await?;
    let other = factory::distributor::create_distributor(db).await?;

    let result = DistributorService::new(db, &cache)
        .update(
            other.id,
            DistributorParams {
                name: existing.name.clone(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
