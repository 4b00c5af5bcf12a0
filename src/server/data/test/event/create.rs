use super::*;

/// Tests recording a recommendation event.
///
/// Verifies that type, name and JSON payload are persisted and the event is
/// stamped with a creation time.
///
/// Expected: Ok with event created
#[tokio::test]
async fn creates_recommend_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = chrono::Utc::now();

    let repo = EventRepository::new(db);
    let event = repo.create(CreateEventParams::recommend_coffee(7)).await?;

    assert!(event.id > 0);
    assert_eq!(event.event_type, COFFEE_EVENT_TYPE);
    assert_eq!(event.name, RECOMMEND_COFFEE_EVENT);
    assert_eq!(event.payload, serde_json::json!({ "coffeeId": 7 }));
    assert!(event.created_at >= before);

    let db_event = Event::find_by_id(event.id).one(db).await?.unwrap();
    assert_eq!(db_event.payload, event.payload);

    Ok(())
}

/// Tests recording several events.
///
/// Expected: Ok with one row per call
#[tokio::test]
async fn creates_one_row_per_call() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    repo.create(CreateEventParams::recommend_coffee(1)).await?;
    repo.create(CreateEventParams::recommend_coffee(1)).await?;
    repo.create(CreateEventParams {
        event_type: COFFEE_EVENT_TYPE.to_string(),
        name: "custom".to_string(),
        payload: serde_json::json!({}),
    })
    .await?;

    let count = Event::find().count(db).await?;
    assert_eq!(count, 3);

    Ok(())
}
