use super::*;

/// Tests that a sales rep scope only returns assigned retailers.
///
/// Expected: Ok with the single retailer assigned to the rep
#[tokio::test]
async fn restricts_to_sales_rep_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (region, area, distributor, assigned) =
        factory::helpers::create_retailer_with_dependencies(db).await?;
    factory::create_retailer(db, region.id, area.id, distributor.id).await?;
    let (_, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;
    factory::create_assignment(db, sales_rep.id, assigned.id).await?;

    let repo = RetailerRepository::new(db);
    let page = repo
        .get_paginated(&RetailerQuery::default(), Some(sales_rep.id))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, assigned.id);
    assert_eq!(page.items[0].sales_reps.len(), 1);
    assert_eq!(page.items[0].sales_reps[0].id, sales_rep.id);

    Ok(())
}

/// Tests a sales rep scope without any assignments.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn returns_empty_page_for_rep_without_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_retailer_with_dependencies(db).await?;
    let (_, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;

    let repo = RetailerRepository::new(db);
    let page = repo
        .get_paginated(&RetailerQuery::default(), Some(sales_rep.id))
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);

    Ok(())
}

/// Tests searching retailers by phone and name.
///
/// Expected: Ok with the retailer whose phone or name contains the term
#[tokio::test]
async fn searches_name_and_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (region, area, distributor, _) =
        factory::helpers::create_retailer_with_dependencies(db).await?;
    let by_phone = factory::retailer::RetailerFactory::new(db, region.id, area.id, distributor.id)
        .name("Alpha Store")
        .phone(Some("01999888777"))
        .build()
        .await?;
    let by_name = factory::retailer::RetailerFactory::new(db, region.id, area.id, distributor.id)
        .name("Mega Mart 98877")
        .build()
        .await?;

    let repo = RetailerRepository::new(db);

    let page = repo
        .get_paginated(
            &RetailerQuery {
                search: Some("988877".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, by_phone.id);

    let page = repo
        .get_paginated(
            &RetailerQuery {
                search: Some("mega mart".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, by_name.id);

    Ok(())
}

/// Tests exact-match taxonomy filters combined with pagination.
///
/// Creates three retailers in one area and one in another, then pages through the first
/// area two at a time.
///
/// Expected: Ok with totals of 3, two pages, and name ordering
#[tokio::test]
async fn filters_by_area_and_paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;
    let area = factory::create_area(db, region.id).await?;
    let other_area = factory::create_area(db, region.id).await?;
    let distributor = factory::create_distributor(db).await?;
    for name in ["Charlie", "Alpha", "Bravo"] {
        factory::retailer::RetailerFactory::new(db, region.id, area.id, distributor.id)
            .name(name)
            .build()
            .await?;
    }
    factory::create_retailer(db, region.id, other_area.id, distributor.id).await?;

    let repo = RetailerRepository::new(db);
    let page = repo
        .get_paginated(
            &RetailerQuery {
                page: PageRequest::new(Some(1), Some(2)).unwrap(),
                area_id: Some(area.id),
                ..Default::default()
            },
            None,
        )
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    let names: Vec<_> = page.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo"]);

    Ok(())
}
