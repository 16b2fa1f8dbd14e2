use super::*;

/// Tests deleting a sales rep user.
///
/// Expected: Ok(true) with the user, its profile and assignments gone
#[tokio::test]
async fn deletes_user_with_profile_and_assignments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;
    let (user, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;
    factory::create_assignment(db, sales_rep.id, retailer.id).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(SalesRepRepository::new(db)
        .find_by_id(sales_rep.id)
        .await?
        .is_none());
    assert!(!repo.delete(user.id).await?);

    Ok(())
}
