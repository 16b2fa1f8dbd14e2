use super::*;

/// Tests that related names are loaded with the retailer.
///
/// Expected: Ok(Some) with region, area, distributor and territory names
#[tokio::test]
async fn loads_related_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::region::RegionFactory::new(db)
        .name("Dhaka")
        .build()
        .await?;
    let area = factory::area::AreaFactory::new(db, region.id)
        .name("Gulshan")
        .build()
        .await?;
    let territory = factory::territory::TerritoryFactory::new(db, area.id)
        .name("Gulshan North")
        .build()
        .await?;
    let distributor = factory::distributor::DistributorFactory::new(db)
        .name("Acme Traders")
        .build()
        .await?;
    let retailer = factory::retailer::RetailerFactory::new(db, region.id, area.id, distributor.id)
        .territory_id(Some(territory.id))
        .build()
        .await?;

    let repo = RetailerRepository::new(db);
    let found = repo.find_by_id(retailer.id).await?.unwrap();

    assert_eq!(found.region.name, "Dhaka");
    assert_eq!(found.area.name, "Gulshan");
    assert_eq!(found.distributor.name, "Acme Traders");
    assert_eq!(found.territory.map(|t| t.name), Some("Gulshan North".to_string()));
    assert!(found.sales_reps.is_empty());

    Ok(())
}

/// Tests looking up a retailer that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_retailer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RetailerRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
