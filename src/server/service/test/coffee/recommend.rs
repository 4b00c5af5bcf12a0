use super::*;
use crate::server::model::event::RECOMMEND_COFFEE_EVENT;

/// Tests recommending a coffee once.
///
/// Expected: Ok with counter incremented and one event recorded
#[tokio::test]
async fn increments_counter_and_records_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coffee = factory::create_coffee(db).await?;

    let service = CoffeeService::new(db);
    let recommended = service.recommend(coffee.id).await?;

    assert_eq!(recommended.id, coffee.id);
    assert_eq!(recommended.recommendations, 1);

    let events = Event::find().all(db).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, RECOMMEND_COFFEE_EVENT);
    assert_eq!(events[0].payload, serde_json::json!({ "coffeeId": coffee.id }));

    Ok(())
}

/// Tests concurrent recommendations of the same coffee.
///
/// N concurrent calls must raise the counter by exactly N and write N events. The
/// database is file-backed so each call's transaction runs on its own connection and
/// the transactions overlap.
///
/// Expected: Ok with no lost increments
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_recommends_lose_no_updates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .with_file_database()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coffee = factory::create_coffee(db).await?;

    let calls = 20;
    let mut handles = Vec::with_capacity(calls);
    for _ in 0..calls {
        let db = db.clone();
        let id = coffee.id;
        handles.push(tokio::spawn(async move {
            CoffeeService::new(&db).recommend(id).await
        }));
    }

    for handle in handles {
        handle.await.unwrap()?;
    }

    let db_coffee = Coffee::find_by_id(coffee.id).one(db).await?.unwrap();
    assert_eq!(db_coffee.recommendations, calls as i32);

    let events = Event::find()
        .filter(entity::event::Column::Name.eq(RECOMMEND_COFFEE_EVENT))
        .count(db)
        .await?;
    assert_eq!(events, calls as u64);

    Ok(())
}

/// Tests recommending a coffee that doesn't exist.
///
/// Verifies that the transaction is rolled back so no event is left behind.
///
/// Expected: Err(AppError::NotFound) and no events
#[tokio::test]
async fn fails_with_not_found_and_writes_no_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CoffeeService::new(db);
    let result = service.recommend(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let events = Event::find().count(db).await?;
    assert_eq!(events, 0);

    Ok(())
}
