use super::*;

/// Tests that deleting a retailer removes its assignments too.
///
/// Expected: Ok(true) and the sales rep no longer sees the retailer
#[tokio::test]
async fn removes_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;
    let (_, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;
    factory::create_assignment(db, sales_rep.id, retailer.id).await?;

    let repo = RetailerRepository::new(db);

    assert!(repo.delete(retailer.id).await?);
    assert!(repo.find_by_id(retailer.id).await?.is_none());
    let remaining = entity::prelude::SalesRepRetailer::find()
        .all(db)
        .await?;
    assert!(remaining.is_empty());

    Ok(())
}
