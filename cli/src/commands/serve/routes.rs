//! # InfraPulse HTTP Routes
//!
//! File: cli/src/commands/serve/routes.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! Route handlers and payload types for the portfolio server:
//! - `GET /` serves the pre-rendered portfolio page
//! - `GET /api/projects?category=` returns the filtered project gallery
//! - `POST /api/chat` answers an utterance via the intent responder
//! - `POST /api/contact` accepts (and only logs) a mock contact submission
//! - `GET /assets/*` serves static files from the site's asset tree
//! - anything else falls back to the rendered 404 page
//!
//! ## Architecture
//!
//! The page markup is rendered once at startup and held in [`AppState`]
//! together with the content model; handlers never touch the filesystem
//! except through `ServeDir`. Every handler is a pure read plus
//! serialization, so the router is freely concurrent without locking.
//!
//! The chat endpoint deliberately returns immediately. The widget's typing
//! delay is a presentation concern and stays client-side.
//!
use crate::core::content::{Project, SiteContent, ALL_CATEGORY};
use crate::core::responder;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::info;

/// Shared, immutable state behind every handler.
pub struct AppState {
    /// The portfolio page, rendered once at startup.
    pub index_html: String,
    /// The 404 page, rendered once at startup.
    pub not_found_html: String,
    /// The content model backing `/api/projects`.
    pub content: SiteContent,
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body for `POST /api/chat`. The timestamp is the HH:MM wall
/// clock the widget prints next to the reply.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub topic: String,
    pub timestamp: String,
}

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
}

/// Request body for `POST /api/contact`.
#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Response body for `POST /api/contact`, both on success and rejection.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub status: String,
    pub detail: String,
}

impl ContactSubmission {
    /// Field-level validation: everything present, and the email at least
    /// shaped like one. There is no backend, so this is the entire check.
    fn validate(&self) -> std::result::Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(format!("Field '{}' must not be empty", field));
            }
        }
        if !self.email.contains('@') {
            return Err("Field 'email' must be a valid email address".to_string());
        }
        Ok(())
    }
}

/// # Build the Route Table (`routes`)
///
/// Assembles the router: page, API endpoints, asset service, and the 404
/// fallback. Middleware layers (tracing, CORS) are applied by the caller in
/// `server_logic`, which also owns binding and shutdown.
///
/// ## Arguments
///
/// * `state`: Shared handler state (rendered pages + content model).
/// * `site_dir`: Site root; `assets/` underneath it is served at `/assets`.
pub fn routes(state: Arc<AppState>, site_dir: &Path) -> Router {
    let assets_service = ServeDir::new(site_dir.join(crate::core::templating::ASSETS_SUBDIR));

    Router::new()
        .route("/", get(index))
        .route("/api/chat", post(chat))
        .route("/api/projects", get(projects))
        .route("/api/contact", post(contact))
        .nest_service("/assets", assets_service)
        .fallback(not_found)
        .with_state(state)
}

/// `GET /`: the pre-rendered portfolio page.
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_html.clone())
}

/// Fallback: the pre-rendered 404 page with the matching status code.
async fn not_found(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(state.not_found_html.clone()))
}

/// `POST /api/chat`: answer an utterance with the intent responder. Total
/// over every input, so this handler has no error path.
async fn chat(Json(request): Json<ChatRequest>) -> Json<ChatReply> {
    let topic = responder::match_topic(&request.message);
    info!("Chat message matched topic '{}'", topic);

    Json(ChatReply {
        reply: responder::reply_for(topic).to_string(),
        topic: topic.to_string(),
        timestamp: chrono::Local::now().format("%H:%M").to_string(),
    })
}

/// `GET /api/projects?category=`: the filtered gallery. No category means
/// everything.
async fn projects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectQuery>,
) -> Json<Vec<Project>> {
    let category = query.category.as_deref().unwrap_or(ALL_CATEGORY);
    let selected: Vec<Project> = state
        .content
        .projects_in(category)
        .into_iter()
        .cloned()
        .collect();
    Json(selected)
}

/// `POST /api/contact`: mock submission. Valid input is logged and
/// acknowledged; nothing is stored and no mail is sent. Invalid input gets
/// a 422 with a field-level message.
async fn contact(
    Json(submission): Json<ContactSubmission>,
) -> (StatusCode, Json<ContactReceipt>) {
    match submission.validate() {
        Ok(()) => {
            info!(
                "Contact form submission from '{}' <{}>: {}",
                submission.name, submission.email, submission.subject
            );
            (
                StatusCode::OK,
                Json(ContactReceipt {
                    status: "sent".to_string(),
                    detail: "Message sent! I will get back to you soon.".to_string(),
                }),
            )
        }
        Err(reason) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ContactReceipt {
                status: "error".to_string(),
                detail: reason,
            }),
        ),
    }
}

// --- Unit Tests ---

/// # Unit Tests for HTTP Routes
///
/// Exercises the route table end to end with `tower::ServiceExt::oneshot`,
/// without binding a socket.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_router(site_dir: &Path) -> Router {
        let state = Arc::new(AppState {
            index_html: "<html>portfolio</html>".to_string(),
            not_found_html: "<html>lost</html>".to_string(),
            content: SiteContent::new(),
        });
        routes(state, site_dir)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body should collect");
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    }

    #[tokio::test]
    async fn test_index_serves_rendered_page() -> Result<()> {
        let site = TempDir::new()?;
        let response = test_router(site.path())
            .oneshot(Request::builder().uri("/").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&bytes[..], b"<html>portfolio</html>");
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_path_gets_the_404_page() -> Result<()> {
        let site = TempDir::new()?;
        let response = test_router(site.path())
            .oneshot(Request::builder().uri("/nope").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&bytes[..], b"<html>lost</html>");
        Ok(())
    }

    #[tokio::test]
    async fn test_chat_endpoint_matches_topics() -> Result<()> {
        let site = TempDir::new()?;
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message": "What are your skills?"}"#))?;

        let response = test_router(site.path()).oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["topic"], "skills");
        assert_eq!(json["reply"], responder::reply_for("skills"));
        // HH:MM
        assert_eq!(json["timestamp"].as_str().unwrap().len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_chat_endpoint_defaults_on_gibberish() -> Result<()> {
        let site = TempDir::new()?;
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message": "asdkjasd"}"#))?;

        let response = test_router(site.path()).oneshot(request).await?;
        let json = body_json(response).await;
        assert_eq!(json["topic"], responder::DEFAULT_TOPIC);
        assert_eq!(json["reply"], responder::DEFAULT_REPLY);
        Ok(())
    }

    #[tokio::test]
    async fn test_projects_endpoint_filters_by_category() -> Result<()> {
        let site = TempDir::new()?;

        let all = test_router(site.path())
            .oneshot(Request::builder().uri("/api/projects").body(Body::empty())?)
            .await?;
        assert_eq!(body_json(all).await.as_array().unwrap().len(), 6);

        let security = test_router(site.path())
            .oneshot(
                Request::builder()
                    .uri("/api/projects?category=Security")
                    .body(Body::empty())?,
            )
            .await?;
        let json = body_json(security).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["title"], "SIEM + Compliance Stack");
        Ok(())
    }

    #[tokio::test]
    async fn test_contact_endpoint_accepts_valid_submissions() -> Result<()> {
        let site = TempDir::new()?;
        let body = serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Nice portfolio."
        });
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?;

        let response = test_router(site.path()).oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "sent");
        Ok(())
    }

    #[tokio::test]
    async fn test_contact_endpoint_rejects_invalid_submissions() -> Result<()> {
        let site = TempDir::new()?;
        let body = serde_json::json!({
            "name": "Ada",
            "email": "not-an-email",
            "subject": "Hello",
            "message": "Nice portfolio."
        });
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?;

        let response = test_router(site.path()).oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert!(json["detail"].as_str().unwrap().contains("email"));
        Ok(())
    }

    #[tokio::test]
    async fn test_assets_are_served_from_the_site_dir() -> Result<()> {
        let site = TempDir::new()?;
        let css_dir = site.path().join("assets/css");
        std::fs::create_dir_all(&css_dir)?;
        std::fs::write(css_dir.join("style.css"), "body { margin: 0; }")?;

        let response = test_router(site.path())
            .oneshot(
                Request::builder()
                    .uri("/assets/css/style.css")
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }
}
