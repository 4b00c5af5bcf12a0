use super::*;

/// Tests recommending a coffee through the handler.
///
/// Expected: 200 with the incremented counter and one event row
#[tokio::test]
async fn recommends_coffee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coffee = factory::create_coffee(db).await?;

    let response = recommend_coffee(State(AppState::new(db.clone())), Ok(Path(coffee.id)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let dto: CoffeeDto = read_json(response).await;
    assert_eq!(dto.recommendations, 1);

    let events = Event::find().count(db).await?;
    assert_eq!(events, 1);

    Ok(())
}

/// Tests recommending a coffee that doesn't exist.
///
/// Expected: 404 Not Found and no event row
#[tokio::test]
async fn returns_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_coffee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = recommend_coffee(State(AppState::new(db.clone())), Ok(Path(5)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let events = Event::find().count(db).await?;
    assert_eq!(events, 0);

    Ok(())
}
