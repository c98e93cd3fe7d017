use axum::{extract::State, http::StatusCode, response::IntoResponse};
use mission_control::server::controller::agent::get_agents;

use super::*;

#[tokio::test]
/// Expect 200 with every agent
async fn lists_agents_for_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .with_agent("Ben", "Cruz", "agent")
        .build()
        .await?;
    sign_in(&test, "agent").await?;

    let result = get_agents(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await.as_array().map(Vec::len), Some(2));

    Ok(())
}

#[tokio::test]
/// Expect 404 when nobody is signed in
async fn requires_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await?;

    let result = get_agents(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
