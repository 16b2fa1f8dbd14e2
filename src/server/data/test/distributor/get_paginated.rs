use super::*;

/// Tests listing distributors on an empty table.
///
/// Expected: Ok with no items, zero total and zero pages
#[tokio::test]
async fn returns_empty_page_for_no_distributors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DistributorRepository::new(db);
    let page = repo.get_paginated(&TaxonomyFilter::default()).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    Ok(())
}

/// Tests listing distributors in name order.
///
/// Expected: Ok with distributors sorted alphabetically
#[tokio::test]
async fn orders_distributors_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Zenith Supply", "Acme Traders"] {
        factory::distributor::DistributorFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = DistributorRepository::new(db);
    let page = repo.get_paginated(&TaxonomyFilter::default()).await?;
    let names: Vec<_> = page.items.iter().map(|d| d.name.as_str()).collect();

    assert_eq!(names, vec!["Acme Traders", "Zenith Supply"]);

    Ok(())
}
