use super::*;

/// Tests finding the profile of a sales rep user and of an admin.
///
/// Expected: Some for the sales rep user, None for the admin
#[tokio::test]
async fn finds_profile_of_sales_rep_user_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;
    let admin = factory::create_admin(db, "admin@example.com").await?;

    let repo = SalesRepRepository::new(db);

    let found = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(found.id, sales_rep.id);
    assert_eq!(found.user_id, user.id);
    assert!(repo.find_by_user_id(admin.id).await?.is_none());

    Ok(())
}
