use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mission_control::{
    model::arsenal::{ArsenalKind, CreateArsenalDto, RenameArsenalDto},
    server::controller::arsenal::{
        create_arsenal, delete_arsenal, get_arsenal, rename_arsenal, ArsenalQuery,
    },
};

use super::*;

fn query(kind: &str) -> Query<ArsenalQuery> {
    Query(ArsenalQuery {
        kind: kind.to_string(),
    })
}

mod get_arsenal {
    use super::*;

    #[tokio::test]
    /// Expect 200 with the category's items and resolved event names
    async fn lists_category() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;
        let event = test.fixtures().insert_event("Wedding", "2026-10-16", false).await?;
        let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;
        test.fixtures().link_events(item.id, &[event.id, 77]).await?;

        let result = get_arsenal(
            State(test.to_app_state()),
            test.session.clone(),
            query("camera"),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body[0]["name"], "Canon R6");
        assert_eq!(body[0]["type"], "camera");
        assert_eq!(
            body[0]["events"],
            serde_json::json!(["Wedding", "Unknown Event (Reference not found)"])
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for a type outside camera, laptop and printer
    async fn rejects_unknown_type() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;

        let result = get_arsenal(
            State(test.to_app_state()),
            test.session.clone(),
            query("drone"),
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
    /// Expect 404 when nobody is signed in
    async fn requires_viewer() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;

        let result = get_arsenal(
            State(test.to_app_state()),
            test.session.clone(),
            query("camera"),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }
}

mod create_arsenal {
    use super::*;

    #[tokio::test]
    /// Expect 201 with the created item
    async fn creates_item() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;

        let result = create_arsenal(
            State(test.to_app_state()),
            test.session.clone(),
            Json(CreateArsenalDto {
                name: "ThinkPad X1".to_string(),
                kind: ArsenalKind::Laptop,
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = json_body(resp).await;
        assert_eq!(body["name"], "ThinkPad X1");
        assert_eq!(body["type"], "laptop");

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for an empty name
    async fn rejects_empty_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;

        let result = create_arsenal(
            State(test.to_app_state()),
            test.session.clone(),
            Json(CreateArsenalDto {
                name: String::new(),
                kind: ArsenalKind::Laptop,
            }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::BAD_REQUEST
        );

        Ok(())
    }
}

mod rename_arsenal {
    use super::*;

    #[tokio::test]
    /// Expect 200 with the item's category so the caller refreshes the right tab
    async fn renames_item() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;
        let item = test.fixtures().insert_arsenal("DNP", "printer").await?;

        let result = rename_arsenal(
            State(test.to_app_state()),
            test.session.clone(),
            Path(item.id),
            Json(RenameArsenalDto {
                name: "DNP DS620".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["name"], "DNP DS620");
        assert_eq!(body["type"], "printer");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown item
    async fn returns_not_found_for_unknown_item() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;

        let result = rename_arsenal(
            State(test.to_app_state()),
            test.session.clone(),
            Path(99),
            Json(RenameArsenalDto {
                name: "Anything".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }
}

mod delete_arsenal {
    use super::*;

    #[tokio::test]
    /// Expect 204 and events keeping their now dangling reference
    async fn deletes_item() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;
        let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;
        let event = test.fixtures().insert_event("Wedding", "2026-10-16", false).await?;
        test.fixtures().assign_arsenal(event.id, &[item.id]).await?;

        let result = delete_arsenal(
            State(test.to_app_state()),
            test.session.clone(),
            Path(item.id),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(
            result.unwrap().into_response().status(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(
            test.fixtures().event_arsenal_refs(event.id).await?,
            vec![item.id]
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown item
    async fn returns_not_found_for_unknown_item() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        sign_in(&test, "agent").await?;

        let result = delete_arsenal(
            State(test.to_app_state()),
            test.session.clone(),
            Path(99),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }
}
