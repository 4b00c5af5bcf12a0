use super::*;

/// Tests finding an existing flavor by name.
///
/// Expected: Ok(Some) with matching flavor
#[tokio::test]
async fn finds_existing_flavor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flavor = factory::flavor::FlavorFactory::new(db)
        .name("vanilla")
        .build()
        .await?;
    factory::create_flavor(db).await?;

    let repo = FlavorRepository::new(db);
    let result = repo.find_by_name("vanilla").await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, flavor.id);
    assert_eq!(found.name, "vanilla");

    Ok(())
}

/// Tests that lookup requires an exact match.
///
/// Expected: Ok(None) for a different-case or partial name
#[tokio::test]
async fn requires_exact_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::flavor::FlavorFactory::new(db)
        .name("vanilla")
        .build()
        .await?;

    let repo = FlavorRepository::new(db);

    assert!(repo.find_by_name("vanill").await?.is_none());
    assert!(repo.find_by_name("vanilla bean").await?.is_none());

    Ok(())
}

/// Tests finding a flavor that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlavorRepository::new(db);
    let result = repo.find_by_name("chocolate").await?;

    assert!(result.is_none());

    Ok(())
}
