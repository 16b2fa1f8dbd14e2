use super::*;

/// Tests that only the provided self-service fields change.
///
/// Expected: Ok(Some) with new points and notes, routes and name untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (region, area, distributor, _) =
        factory::helpers::create_retailer_with_dependencies(db).await?;
    let retailer = factory::retailer::RetailerFactory::new(db, region.id, area.id, distributor.id)
        .name("Corner Shop")
        .routes("Route 7")
        .build()
        .await?;

    let repo = RetailerRepository::new(db);
    let updated = repo
        .update_by_sales_rep(
            retailer.id,
            SalesRepRetailerUpdate {
                points: Some(40),
                notes: Some("Visited".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.points, 40);
    assert_eq!(updated.notes, "Visited");
    assert_eq!(updated.routes, "Route 7");
    assert_eq!(updated.name, "Corner Shop");

    Ok(())
}
