use super::*;

/// Tests that regions come back ordered by name with correct totals.
///
/// Verifies that the second page of a two-per-page listing holds the last region
/// alphabetically and that the meta counts every region.
///
/// Expected: Ok with one region on page 2 and total of 3
#[tokio::test]
async fn returns_regions_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Sylhet", "Dhaka", "Khulna"] {
        factory::region::RegionFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = RegionRepository::new(db);
    let page = repo
        .get_paginated(&TaxonomyFilter {
            page: PageRequest::new(Some(2), Some(2)).unwrap(),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Sylhet");

    Ok(())
}

/// Tests case-insensitive name search.
///
/// Expected: Ok with only the matching region
#[tokio::test]
async fn filters_by_search_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::region::RegionFactory::new(db)
        .name("Dhaka")
        .build()
        .await?;
    factory::region::RegionFactory::new(db)
        .name("Rajshahi")
        .build()
        .await?;

    let repo = RegionRepository::new(db);
    let page = repo
        .get_paginated(&TaxonomyFilter {
            search: Some("DHA".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Dhaka");

    Ok(())
}

/// Tests that `_` and `%` in a search term match literally instead of as wildcards.
///
/// Expected: Ok with only the region whose name contains the literal term
#[tokio::test]
async fn treats_wildcards_in_search_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taxonomy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["North_East", "NorthXEast", "Zone 50%", "Zone 500"] {
        factory::region::RegionFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = RegionRepository::new(db);
    let underscore = repo
        .get_paginated(&TaxonomyFilter {
            search: Some("h_e".to_string()),
            ..Default::default()
        })
        .await?;
    let percent = repo
        .get_paginated(&TaxonomyFilter {
            search: Some("50%".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(underscore.total, 1);
    assert_eq!(underscore.items[0].name, "North_East");
    assert_eq!(percent.total, 1);
    assert_eq!(percent.items[0].name, "Zone 50%");

    Ok(())
}
