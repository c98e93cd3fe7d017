use axum::{extract::State, http::StatusCode, response::IntoResponse};
use mission_control::server::{
    controller::auth::{get_viewer, logout},
    model::session::agent::SessionAgentId,
};

use super::*;

mod viewer {
    use super::*;

    #[tokio::test]
    /// Expect 200 with the viewer's name and role
    async fn returns_viewer_in_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        let agent = sign_in(&test, "admin").await?;

        let result = get_viewer(State(test.to_app_state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["id"], agent.id);
        assert_eq!(body["role"], "admin");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 "User not found" when nobody is signed in
    async fn returns_not_found_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;

        let result = get_viewer(State(test.to_app_state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(resp).await["error"], "User not found");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 and a cleared session when the agent no longer exists
    async fn clears_session_for_deleted_agent() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        SessionAgentId::insert(&test.session, 42).await.unwrap();

        let result = get_viewer(State(test.to_app_state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(SessionAgentId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 when the agents table is missing
    async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAgentId::insert(&test.session, 1).await.unwrap();

        let result = get_viewer(State(test.to_app_state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    /// Expect 307 redirect and the agent removed from the session
    async fn clears_session_and_redirects() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAgentId::insert(&test.session, 1).await.unwrap();

        let result = logout(test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert!(SessionAgentId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect 307 redirect even when the session is empty
    async fn redirects_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = logout(test.session.clone()).await;

        assert!(result.is_ok());
        assert_eq!(
            result.unwrap().into_response().status(),
            StatusCode::TEMPORARY_REDIRECT
        );

        Ok(())
    }
}
