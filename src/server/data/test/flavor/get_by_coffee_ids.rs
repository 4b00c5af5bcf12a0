use super::*;

/// Tests grouping flavors by coffee.
///
/// Verifies that a flavor shared between coffees appears under each of them and
/// that flavors are ordered by ID within each group.
///
/// Expected: Ok with flavors grouped per coffee
#[tokio::test]
async fn groups_flavors_by_coffee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coffee1, flavors) =
        factory::helpers::create_coffee_with_flavors(db, &["vanilla", "caramel"]).await?;
    let coffee2 = factory::create_coffee(db).await?;
    factory::attach_flavor(db, coffee2.id, flavors[1].id).await?;

    let repo = FlavorRepository::new(db);
    let grouped = repo.get_by_coffee_ids(&[coffee1.id, coffee2.id]).await?;

    let coffee1_ids: Vec<i32> = grouped[&coffee1.id].iter().map(|f| f.id).collect();
    assert_eq!(coffee1_ids, vec![flavors[0].id, flavors[1].id]);

    let coffee2_ids: Vec<i32> = grouped[&coffee2.id].iter().map(|f| f.id).collect();
    assert_eq!(coffee2_ids, vec![flavors[1].id]);

    Ok(())
}

/// Tests that coffees without flavors are absent from the map.
///
/// Expected: Ok with no entry for the plain coffee
#[tokio::test]
async fn omits_coffees_without_flavors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plain = factory::create_coffee(db).await?;

    let repo = FlavorRepository::new(db);
    let grouped = repo.get_by_coffee_ids(&[plain.id]).await?;

    assert!(!grouped.contains_key(&plain.id));

    Ok(())
}

/// Tests an empty coffee ID list.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_coffee_with_flavors(db, &["vanilla"]).await?;

    let repo = FlavorRepository::new(db);
    let grouped = repo.get_by_coffee_ids(&[]).await?;

    assert!(grouped.is_empty());

    Ok(())
}
