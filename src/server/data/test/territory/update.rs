use super::*;

/// Tests moving a territory to another area.
///
/// Expected: Ok(Some) carrying the new area ID and name
#[tokio::test]
async fn moves_territory_to_another_area() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;
    let from = factory::create_area(db, region.id).await?;
    let to = factory::area::AreaFactory::new(db, region.id)
        .name("Uttara")
        .build()
        .await?;
    let territory = factory::create_territory(db, from.id).await?;

    let repo = TerritoryRepository::new(db);
    let updated = repo
        .update(
            territory.id,
            TerritoryParams {
                name: territory.name.clone(),
                area_id: to.id,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.area_id, to.id);
    assert_eq!(updated.area_name, "Uttara");
    assert_eq!(repo.count_by_area(from.id).await?, 0);

    Ok(())
}
