use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mission_control::{
    model::event::{CreateEventDto, UpdateEventDto},
    server::controller::event::{
        archive_event, create_event, get_board, get_event, update_event, BoardQuery,
    },
};

use super::*;

fn on(date: &str) -> Query<BoardQuery> {
    Query(BoardQuery {
        date: Some(date.to_string()),
    })
}

mod get_board {
    use super::*;

    #[tokio::test]
    /// Expect an agent to only receive events listing them
    async fn filters_board_for_agent() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        let agent = sign_in(&test, "agent").await?;
        let mine = test.fixtures().insert_event("Wedding", "2026-10-16", false).await?;
        test.fixtures().insert_event("Debut", "2026-10-16", false).await?;
        test.fixtures().assign_agents(mine.id, &[agent.id]).await?;

        let result = get_board(
            State(test.to_app_state()),
            test.session.clone(),
            on("2026-10-16"),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["id"], mine.id);
        assert_eq!(body[0]["agent_names"], serde_json::json!(["Ana Reyes"]));

        Ok(())
    }

    #[tokio::test]
    /// Expect an admin to receive every event of the day
    async fn shows_all_events_to_admin() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "admin").await?;
        test.fixtures().insert_event("Wedding", "2026-10-16", false).await?;
        test.fixtures().insert_event("Debut", "2026-10-16", false).await?;

        let result = get_board(
            State(test.to_app_state()),
            test.session.clone(),
            on("2026-10-16"),
        )
        .await;

        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for a malformed date
    async fn rejects_malformed_date() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "admin").await?;

        let result = get_board(
            State(test.to_app_state()),
            test.session.clone(),
            on("10/16/2026"),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::BAD_REQUEST
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect the server's date to be used when none is provided
    async fn defaults_to_server_date() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "admin").await?;

        let result = get_board(
            State(test.to_app_state()),
            test.session.clone(),
            Query(BoardQuery { date: None }),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

        Ok(())
    }
}

mod create_event {
    use super::*;

    #[tokio::test]
    /// Expect 400 with the inline form message when the date is missing
    async fn rejects_missing_date() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;

        let result = create_event(
            State(test.to_app_state()),
            test.session.clone(),
            Json(CreateEventDto {
                name: "Wedding".to_string(),
                date: String::new(),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(resp).await["error"],
            "Both event name and date are required."
        );

        Ok(())
    }
}

mod get_event {
    use super::*;

    #[tokio::test]
    /// Expect 200 with the stored name, even when empty
    async fn returns_event() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;
        let event = test.fixtures().insert_event("", "2026-10-16", false).await?;

        let result = get_event(
            State(test.to_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await;

        assert!(result.is_ok());
        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body["event_name"], "");
        assert_eq!(body["event_date"], "2026-10-16");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown event
    async fn returns_not_found_for_unknown_event() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;

        let result = get_event(State(test.to_app_state()), test.session.clone(), Path(5)).await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }
}

mod update_event {
    use super::*;

    #[tokio::test]
    /// Expect 200 with updated fields and resolved assignments
    async fn updates_event() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        let agent = sign_in(&test, "agent").await?;
        let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;
        let event = test.fixtures().insert_event("Wedding", "2026-10-16", false).await?;

        let result = update_event(
            State(test.to_app_state()),
            test.session.clone(),
            Path(event.id),
            Json(UpdateEventDto {
                event_name: "Wedding".to_string(),
                event_date: "2026-10-16".to_string(),
                location: "Manila".to_string(),
                agents: vec![agent.id],
                arsenal: vec![item.id],
                ..Default::default()
            }),
        )
        .await;

        assert!(result.is_ok());
        let body = json_body(result.unwrap().into_response()).await;
        assert_eq!(body["location"], "Manila");
        assert_eq!(body["agent_names"], serde_json::json!(["Ana Reyes"]));
        assert_eq!(body["arsenal_names"], serde_json::json!(["Canon R6"]));

        Ok(())
    }
}

mod archive_event {
    use super::*;

    #[tokio::test]
    /// Expect 204 for an admin
    async fn admin_archives_event() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "admin").await?;
        let event = test.fixtures().insert_event("Wedding", "2026-10-16", false).await?;

        let result = archive_event(
            State(test.to_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(
            result.unwrap().into_response().status(),
            StatusCode::NO_CONTENT
        );
        assert!(test.fixtures().all_events().await?[0].is_archive);

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 for an agent without the admin role
    async fn forbids_agent() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;
        let event = test.fixtures().insert_event("Wedding", "2026-10-16", false).await?;

        let result = archive_event(
            State(test.to_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::FORBIDDEN
        );

        Ok(())
    }
}
