//! Calls to the mission control API.
//!
//! Requests include the session cookie. Non-success responses are turned into an
//! [`ApiError`] carrying the server's `ErrorDto` message when one was returned.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::model::{
    agent::AgentDto,
    api::ErrorDto,
    arsenal::{ArsenalItemDto, ArsenalKind, CreateArsenalDto, RenameArsenalDto},
    event::{CreateEventDto, CreatedEventDto, EventDto, UpdateEventDto},
};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// HTTP status, 0 when the request never reached the server
    pub status: u16,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "Request failed with status {}: {}", self.status, self.message)
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[cfg(feature = "web")]
async fn send(method: Method, url: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
    use reqwasm::http::{Method as HttpMethod, Request, RequestCredentials};

    let method = match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    };

    let mut request = Request::new(url)
        .method(method)
        .credentials(RequestCredentials::Include);
    if let Some(body) = body {
        request = request
            .header("Content-Type", "application/json")
            .body(body);
    }

    let response = request.send().await.map_err(|e| ApiError {
        status: 0,
        message: format!("Failed to send request: {}", e),
    })?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Ok((status, text))
}

#[cfg(not(feature = "web"))]
async fn send(_method: Method, url: &str, _body: Option<String>) -> Result<(u16, String), ApiError> {
    Err(ApiError {
        status: 0,
        message: format!("Cannot request {} outside of the web client", url),
    })
}

async fn request<T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let (status, text) = send(method, url, body).await?;

    if !(200..300).contains(&status) {
        return Err(error_from_body(status, &text));
    }

    // 204 responses carry no body
    let text = if text.is_empty() { "null" } else { text.as_str() };

    serde_json::from_str(text).map_err(|e| ApiError {
        status,
        message: format!("Failed to parse response: {}", e),
    })
}

fn with_body<B: Serialize>(body: &B) -> Result<Option<String>, ApiError> {
    serde_json::to_string(body).map(Some).map_err(|e| ApiError {
        status: 0,
        message: format!("Failed to serialize request: {}", e),
    })
}

fn error_from_body(status: u16, text: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorDto>(text) {
        Ok(error_dto) => error_dto.error,
        Err(_) if text.is_empty() => "Unknown error".to_string(),
        Err(_) => text.to_string(),
    };

    ApiError { status, message }
}

/// Current viewer, `Ok(None)` when nobody is signed in
pub async fn get_viewer() -> Result<Option<AgentDto>, ApiError> {
    match request::<AgentDto>(Method::Get, "/api/auth/viewer", None).await {
        Ok(viewer) => Ok(Some(viewer)),
        Err(e) if e.status == 404 => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn get_agents() -> Result<Vec<AgentDto>, ApiError> {
    request(Method::Get, "/api/agents", None).await
}

pub async fn get_arsenal(kind: ArsenalKind) -> Result<Vec<ArsenalItemDto>, ApiError> {
    request(Method::Get, &format!("/api/arsenal?type={}", kind), None).await
}

pub async fn create_arsenal(name: String, kind: ArsenalKind) -> Result<ArsenalItemDto, ApiError> {
    let body = with_body(&CreateArsenalDto { name, kind })?;

    request(Method::Post, "/api/arsenal", body).await
}

pub async fn rename_arsenal(item_id: i32, name: String) -> Result<ArsenalItemDto, ApiError> {
    let body = with_body(&RenameArsenalDto { name })?;

    request(Method::Patch, &format!("/api/arsenal/{}", item_id), body).await
}

pub async fn delete_arsenal(item_id: i32) -> Result<(), ApiError> {
    request(Method::Delete, &format!("/api/arsenal/{}", item_id), None).await
}

/// Event board for the provided local calendar day
pub async fn get_board(date: &str) -> Result<Vec<EventDto>, ApiError> {
    request(Method::Get, &format!("/api/events/today?date={}", date), None).await
}

pub async fn create_event(form: &CreateEventDto) -> Result<CreatedEventDto, ApiError> {
    request(Method::Post, "/api/events", with_body(form)?).await
}

pub async fn get_event(event_id: i32) -> Result<EventDto, ApiError> {
    request(Method::Get, &format!("/api/events/{}", event_id), None).await
}

pub async fn update_event(event_id: i32, form: &UpdateEventDto) -> Result<EventDto, ApiError> {
    request(Method::Put, &format!("/api/events/{}", event_id), with_body(form)?).await
}

pub async fn archive_event(event_id: i32) -> Result<(), ApiError> {
    request(
        Method::Post,
        &format!("/api/events/{}/archive", event_id),
        None,
    )
    .await
}
