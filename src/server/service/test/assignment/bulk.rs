use super::*;

/// Tests assigning reports the number of distinct retailers and creates the rows.
///
/// Expected: Ok(2) with both retailers assigned
#[tokio::test]
async fn assigns_retailers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (region, area, distributor, first) =
        factory::helpers::create_retailer_with_dependencies(db).await?;
    let second =
        factory::retailer::create_retailer(db, region.id, area.id, distributor.id).await?;
    let (_, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;

    let affected = AssignmentService::new(db, &cache)
        .bulk(BulkAssignParams {
            sales_rep_id: sales_rep.id,
            retailer_ids: vec![first.id, second.id],
            action: BulkAction::Assign,
        })
        .await?;

    let repo = AssignmentRepository::new(db);
    assert_eq!(affected, 2);
    assert!(repo.is_assigned(sales_rep.id, first.id).await?);
    assert!(repo.is_assigned(sales_rep.id, second.id).await?);

    Ok(())
}

/// Tests a batch touching another rep's retailer fails without any change.
///
/// Verifies that the free retailer in the same batch is not assigned either and the
/// conflict names the current owner.
///
/// Expected: Err(AppError::AssignmentConflict) with one conflict
#[tokio::test]
async fn rejects_batch_with_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (region, area, distributor, taken) =
        factory::helpers::create_retailer_with_dependencies(db).await?;
    let free = factory::retailer::create_retailer(db, region.id, area.id, distributor.id).await?;
    let (_, owner) = factory::helpers::create_sales_rep_with_user(db).await?;
    let (_, requester) = factory::helpers::create_sales_rep_with_user(db).await?;
    factory::assignment::create_assignment(db, owner.id, taken.id).await?;

    let result = AssignmentService::new(db, &cache)
        .bulk(BulkAssignParams {
            sales_rep_id: requester.id,
            retailer_ids: vec![taken.id, free.id],
            action: BulkAction::Assign,
        })
        .await;

    match result {
        Err(AppError::AssignmentConflict(conflicts)) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].retailer_id, taken.id);
            assert_eq!(conflicts[0].sales_rep_id, owner.id);
            assert_eq!(conflicts[0].sales_rep_name, owner.name);
        }
        other => panic!("Expected AssignmentConflict, got: {:?}", other),
    }

    let repo = AssignmentRepository::new(db);
    assert!(!repo.is_assigned(requester.id, free.id).await?);
    assert!(repo.is_assigned(owner.id, taken.id).await?);

    Ok(())
}

/// Tests assigning a retailer to its current rep again succeeds.
///
/// Expected: Ok(1)
#[tokio::test]
async fn reassigning_to_owner_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;
    let (_, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;
    factory::assignment::create_assignment(db, sales_rep.id, retailer.id).await?;

    let affected = AssignmentService::new(db, &cache)
        .bulk(BulkAssignParams {
            sales_rep_id: sales_rep.id,
            retailer_ids: vec![retailer.id],
            action: BulkAction::Assign,
        })
        .await?;

    assert_eq!(affected, 1);

    Ok(())
}

/// Tests unknown retailer IDs are rejected on assign.
///
/// Expected: Err(AppError::NotFound) naming the missing ID
#[tokio::test]
async fn rejects_unknown_retailers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;
    let (_, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;

    let result = AssignmentService::new(db, &cache)
        .bulk(BulkAssignParams {
            sales_rep_id: sales_rep.id,
            retailer_ids: vec![retailer.id, 4242],
            action: BulkAction::Assign,
        })
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert!(message.contains("4242")),
        other => panic!("Expected NotFound, got: {:?}", other),
    }
    assert!(
        !AssignmentRepository::new(db)
            .is_assigned(sales_rep.id, retailer.id)
            .await?
    );

    Ok(())
}

/// Tests an unknown sales rep is rejected.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_sales_rep() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;

    let result = AssignmentService::new(db, &cache)
        .bulk(BulkAssignParams {
            sales_rep_id: 777,
            retailer_ids: vec![retailer.id],
            action: BulkAction::Unassign,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests unassign leaves other reps' assignments alone.
///
/// Expected: Ok(2) with only the requester's row removed
#[tokio::test]
async fn unassign_only_clears_own_assignments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (region, area, distributor, own) =
        factory::helpers::create_retailer_with_dependencies(db).await?;
    let foreign =
        factory::retailer::create_retailer(db, region.id, area.id, distributor.id).await?;
    let (_, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;
    let (_, other) = factory::helpers::create_sales_rep_with_user(db).await?;
    factory::assignment::create_assignment(db, sales_rep.id, own.id).await?;
    factory::assignment::create_assignment(db, other.id, foreign.id).await?;

    let affected = AssignmentService::new(db, &cache)
        .bulk(BulkAssignParams {
            sales_rep_id: sales_rep.id,
            retailer_ids: vec![own.id, foreign.id],
            action: BulkAction::Unassign,
        })
        .await?;

    let repo = AssignmentRepository::new(db);
    assert_eq!(affected, 2);
    assert!(!repo.is_assigned(sales_rep.id, own.id).await?);
    assert!(repo.is_assigned(other.id, foreign.id).await?);

    Ok(())
}

/// Tests a successful bulk operation drops the rep's cached pages.
///
/// Expected: Ok with the cached entry gone
#[tokio::test]
async fn invalidates_sales_rep_cache() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_retailer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = listing_cache();

    let (_, _, _, retailer) = factory::helpers::create_retailer_with_dependencies(db).await?;
    let (_, sales_rep) = factory::helpers::create_sales_rep_with_user(db).await?;
    let key = format!("{}page", sales_rep_namespace(sales_rep.id));
    cache.insert(key.clone(), "{}".to_string()).await;

    AssignmentService::new(db, &cache)
        .bulk(BulkAssignParams {
            sales_rep_id: sales_rep.id,
            retailer_ids: vec![retailer.id],
            action: BulkAction::Assign,
        })
        .await?;

    assert!(cache.get(&key).await.is_none());

    Ok(())
}
