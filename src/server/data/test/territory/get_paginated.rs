use super::*;

/// Tests filtering territories by area and searching by name.
///
/// Expected: Ok with only the matching territory of the requested area
#[tokio::test]
async fn filters_by_area_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;
    let area = factory::area::AreaFactory::new(db, region.id)
        .name("Gulshan")
        .build()
        .await?;
    let other_area = factory::create_area(db, region.id).await?;
    factory::territory::TerritoryFactory::new(db, area.id)
        .name("Gulshan North")
        .build()
        .await?;
    factory::territory::TerritoryFactory::new(db, area.id)
        .name("Banani")
        .build()
        .await?;
    factory::territory::TerritoryFactory::new(db, other_area.id)
        .name("North Point")
        .build()
        .await?;

    let repo = TerritoryRepository::new(db);
    let page = repo
        .get_paginated(&TaxonomyFilter {
            area_id: Some(area.id),
            search: Some("north".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Gulshan North");
    assert_eq!(page.items[0].area_name, "Gulshan");

    Ok(())
}
