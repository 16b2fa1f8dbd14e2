use super::*;

/// Tests renaming an existing region.
///
/// Expected: Ok(Some) with the new name
#[tokio::test]
async fn renames_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;

    let repo = RegionRepository::new(db);
    let updated = repo
        .update(
            region.id,
            RegionParams {
                name: "Chattogram".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.map(|r| r.name), Some("Chattogram".to_string()));

    Ok(())
}

/// Tests updating a region that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegionRepository::new(db);
    let updated = repo
        .update(
            999,
            RegionParams {
                name: "Nowhere".to_string(),
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
