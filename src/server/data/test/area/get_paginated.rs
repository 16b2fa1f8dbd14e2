use super::*;

/// Tests filtering areas by region.
///
/// Verifies that only areas of the requested region are returned and that each carries the
/// name of its region.
///
/// Expected: Ok with the single area of the second region
#[tokio::test]
async fn filters_by_region_and_includes_region_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dhaka = factory::region::RegionFactory::new(db)
        .name("Dhaka")
        .build()
        .await?;
    let sylhet = factory::region::RegionFactory::new(db)
        .name("Sylhet")
        .build()
        .await?;
    factory::create_area(db, dhaka.id).await?;
    let zindabazar = factory::area::AreaFactory::new(db, sylhet.id)
        .name("Zindabazar")
        .build()
        .await?;

    let repo = AreaRepository::new(db);
    let page = repo
        .get_paginated(&TaxonomyFilter {
            region_id: Some(sylhet.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, zindabazar.id);
    assert_eq!(page.items[0].region_name, "Sylhet");

    Ok(())
}
