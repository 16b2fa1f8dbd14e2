use super::*;

/// Tests inserting a batch of retailers.
///
/// Expected: Ok(2) and both retailers listed afterwards
#[tokio::test]
async fn inserts_all_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;
    let area = factory::create_area(db, region.id).await?;
    let distributor = factory::create_distributor(db).await?;
    let params = |name: &str, phone: &str| RetailerParams {
        name: name.to_string(),
        phone: Some(phone.to_string()),
        region_id: region.id,
        area_id: area.id,
        distributor_id: distributor.id,
        territory_id: None,
        points: 0,
        routes: String::new(),
        notes: String::new(),
    };

    let repo = RetailerRepository::new(db);
    let inserted = repo
        .create_many(vec![
            params("First", "01300000001"),
            params("Second", "01300000002"),
        ])
        .await?;

    assert_eq!(inserted, 2);
    let page = repo.get_paginated(&RetailerQuery::default(), None).await?;
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests that a failing row rolls back the whole batch.
///
/// The second row reuses a phone number already stored, violating the unique index.
///
/// Expected: Err and no new retailer stored
#[tokio::test]
async fn rolls_back_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (region, area, distributor, existing) =
        factory::helpers::create_retailer_with_dependencies(db).await?;
    let params = |phone: Option<String>| RetailerParams {
        name: "Batch".to_string(),
        phone,
        region_id: region.id,
        area_id: area.id,
        distributor_id: distributor.id,
        territory_id: None,
        points: 0,
        routes: String::new(),
        notes: String::new(),
    };

    let repo = RetailerRepository::new(db);
    let result = repo
        .create_many(vec![
            params(Some("01300000009".to_string())),
            params(existing.phone.clone()),
        ])
        .await;

    assert!(result.is_err());
    let page = repo.get_paginated(&RetailerQuery::default(), None).await?;
    assert_eq!(page.total, 1);

    Ok(())
}

/// Tests inserting more rows than fit in a single insert statement.
///
/// Expected: Ok(1000) and every row stored
#[tokio::test]
async fn inserts_rows_across_batches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;
    let area = factory::create_area(db, region.id).await?;
    let distributor = factory::create_distributor(db).await?;
    let rows: Vec<RetailerParams> = (0..1000)
        .map(|i| RetailerParams {
            name: format!("Retailer {}", i),
            phone: Some(format!("0190{:07}", i)),
            region_id: region.id,
            area_id: area.id,
            distributor_id: distributor.id,
            territory_id: None,
            points: 0,
            routes: String::new(),
            notes: String::new(),
        })
        .collect();

    let repo = RetailerRepository::new(db);
    let inserted = repo.create_many(rows).await?;

    assert_eq!(inserted, 1000);
    assert_eq!(entity::prelude::Retailer::find().all(db).await?.len(), 1000);

    Ok(())
}
