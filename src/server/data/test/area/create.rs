use super::*;

/// Tests creating an area.
///
/// Expected: Ok with the stored area and its region name
#[tokio::test]
async fn creates_area_with_region_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::region::RegionFactory::new(db)
        .name("Khulna")
        .build()
        .await?;

    let repo = AreaRepository::new(db);
    let area = repo
        .create(AreaParams {
            name: "Sonadanga".to_string(),
            region_id: region.id,
        })
        .await?;

    assert_eq!(area.name, "Sonadanga");
    assert_eq!(area.region_id, region.id);
    assert_eq!(area.region_name, "Khulna");
    assert!(repo.find_by_id(area.id).await?.is_some());

    Ok(())
}
