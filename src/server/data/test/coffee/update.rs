use super::*;

/// Tests updating only the brand.
///
/// Verifies that fields passed as `None` keep their current values and the flavor
/// links are left untouched.
///
/// Expected: Ok with brand changed and everything else preserved
#[tokio::test]
async fn updates_brand_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coffee, _) = factory::helpers::create_coffee_with_flavors(db, &["vanilla"]).await?;

    let repo = CoffeeRepository::new(db);
    let updated = repo
        .update(coffee.id, None, Some("Nescafe".to_string()), None)
        .await?;

    assert_eq!(updated.id, coffee.id);
    assert_eq!(updated.name, coffee.name);
    assert_eq!(updated.brand, "Nescafe");
    assert_eq!(updated.flavors.len(), 1);
    assert_eq!(updated.flavors[0].name, "vanilla");

    Ok(())
}

/// Tests replacing the flavor set.
///
/// Verifies that old join rows are removed and only the new flavors remain linked.
///
/// Expected: Ok with only the replacement flavor linked
#[tokio::test]
async fn replaces_flavor_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coffee, old_flavors) =
        factory::helpers::create_coffee_with_flavors(db, &["vanilla", "caramel"]).await?;
    let mocha = factory::flavor::FlavorFactory::new(db)
        .name("mocha")
        .build()
        .await?;

    let repo = CoffeeRepository::new(db);
    let updated = repo
        .update(coffee.id, None, None, Some([mocha.id].as_slice()))
        .await?;

    assert_eq!(updated.flavors.len(), 1);
    assert_eq!(updated.flavors[0].id, mocha.id);

    let links = CoffeeFlavor::find()
        .filter(entity::coffee_flavor::Column::CoffeeId.eq(coffee.id))
        .count(db)
        .await?;
    assert_eq!(links, 1);

    // Replaced flavors are unlinked but not deleted
    let remaining = Flavor::find()
        .filter(entity::flavor::Column::Id.is_in(old_flavors.iter().map(|f| f.id)))
        .count(db)
        .await?;
    assert_eq!(remaining, 2);

    Ok(())
}

/// Tests clearing the flavor set with an empty replacement.
///
/// Expected: Ok with no flavors linked
#[tokio::test]
async fn clears_flavors_with_empty_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coffee, _) = factory::helpers::create_coffee_with_flavors(db, &["vanilla"]).await?;

    let repo = CoffeeRepository::new(db);
    let updated = repo.update(coffee.id, None, None, Some([].as_slice())).await?;

    assert!(updated.flavors.is_empty());

    Ok(())
}

/// Tests updating a coffee that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_coffee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CoffeeRepository::new(db);
    let result = repo
        .update(999, Some("Ghost".to_string()), None, None)
        .await;

    assert!(matches!(result, Err(sea_orm::DbErr::RecordNotFound(_))));

    Ok(())
}
