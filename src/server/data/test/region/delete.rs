use super::*;

/// Tests deleting a region and deleting it again.
///
/// Expected: true on the first call, false on the second
#[tokio::test]
async fn reports_whether_a_row_was_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;

    let repo = RegionRepository::new(db);

    assert!(repo.delete(region.id).await?);
    assert!(!repo.delete(region.id).await?);
    assert!(repo.find_by_id(region.id).await?.is_none());

    Ok(())
}
