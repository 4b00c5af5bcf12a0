use super::*;

/// Tests getting a coffee with its flavors.
///
/// Expected: Ok(Some) with flavors loaded
#[tokio::test]
async fn gets_coffee_with_flavors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coffee, flavors) =
        factory::helpers::create_coffee_with_flavors(db, &["caramel", "hazelnut"]).await?;

    let repo = CoffeeRepository::new(db);
    let result = repo.get_by_id(coffee.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, coffee.id);
    assert_eq!(found.name, coffee.name);
    assert_eq!(found.flavors.len(), 2);
    assert_eq!(found.flavors[0].id, flavors[0].id);
    assert_eq!(found.flavors[1].id, flavors[1].id);

    Ok(())
}

/// Tests getting a coffee that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_coffee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CoffeeRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that flavors of other coffees are not mixed in.
///
/// Expected: Ok with only the requested coffee's flavors
#[tokio::test]
async fn only_loads_own_flavors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coffee1, _) = factory::helpers::create_coffee_with_flavors(db, &["mocha"]).await?;
    let (_coffee2, _) = factory::helpers::create_coffee_with_flavors(db, &["citrus"]).await?;

    let repo = CoffeeRepository::new(db);
    let found = repo.get_by_id(coffee1.id).await?.unwrap();

    assert_eq!(found.flavors.len(), 1);
    assert_eq!(found.flavors[0].name, "mocha");

    Ok(())
}
