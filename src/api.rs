//! API Client
//!
//! Typed bindings to the remote task-list service. The session credential
//! and the unauthorized-callback are injected at construction; nothing here
//! reads ambient global state.

use leptos::prelude::{expect_context, Callable, Callback};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ListSummary, TaskList};
use crate::session::Session;

/// Characters escaped when a list id is interpolated into a URL path
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Resolve the API base URL: build-time override, else same-origin `/api`
pub fn resolve_base_url() -> String {
    if let Some(configured) = option_env!("TICKLIST_API_URL") {
        return configured.trim_end_matches('/').to_string();
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}/api")
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` comes from the error body when present
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 401 — the session has already been invalidated by the time the
    /// caller sees this variant
    #[error("session expired")]
    Unauthorized,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided message when available, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

// ========================
// Request/Response Bodies
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "rememberMe")]
    remember_me: bool,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct TaskTextArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct ReorderArgs<'a> {
    #[serde(rename = "taskIds")]
    task_ids: &'a [u32],
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
struct ListEnvelope {
    list: TaskList,
}

#[derive(Deserialize)]
struct SummaryEnvelope {
    list: ListSummary,
}

#[derive(Deserialize)]
struct ListsEnvelope {
    lists: Vec<ListSummary>,
}

#[derive(Deserialize)]
struct ErrorBody {
    msg: Option<String>,
}

// ========================
// Client
// ========================

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    on_unauthorized: Callback<()>,
}

/// Get the API client from context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

impl ApiClient {
    pub fn new(base_url: String, session: Session, on_unauthorized: Callback<()>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
            on_unauthorized,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn list_url(&self, list_id: &str, suffix: &str) -> String {
        format!(
            "{}/lists/{}{}",
            self.base_url,
            utf8_percent_encode(list_id, SEGMENT),
            suffix
        )
    }

    // ---- auth ----

    pub async fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<String, ApiError> {
        let req = self.http.post(self.url("/auth/login")).json(&LoginArgs {
            email,
            password,
            remember_me,
        });
        // A 401 here means bad credentials, not an expired session
        let resp: TokenResponse = self.send(req, false).await?;
        Ok(resp.token)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let req = self.http.post(self.url("/auth/register")).json(&RegisterArgs {
            name,
            email,
            password,
        });
        self.send_empty(req, false).await
    }

    // ---- lists ----

    pub async fn lists(&self) -> Result<Vec<ListSummary>, ApiError> {
        let req = self.http.get(self.url("/lists"));
        let resp: ListsEnvelope = self.send(req, true).await?;
        Ok(resp.lists)
    }

    pub async fn create_list(&self, title: &str) -> Result<ListSummary, ApiError> {
        let req = self.http.post(self.url("/lists")).json(&TitleArgs { title });
        let resp: SummaryEnvelope = self.send(req, true).await?;
        Ok(resp.list)
    }

    pub async fn delete_list(&self, list_id: &str) -> Result<(), ApiError> {
        let req = self.http.delete(self.list_url(list_id, ""));
        self.send_empty(req, true).await
    }

    pub async fn get_list(&self, list_id: &str) -> Result<TaskList, ApiError> {
        let req = self.http.get(self.list_url(list_id, ""));
        let resp: ListEnvelope = self.send(req, true).await?;
        Ok(resp.list)
    }

    // ---- tasks ----

    pub async fn create_task(&self, list_id: &str, text: &str) -> Result<TaskList, ApiError> {
        let req = self
            .http
            .post(self.list_url(list_id, "/tasks"))
            .json(&TaskTextArgs { text });
        let resp: ListEnvelope = self.send(req, true).await?;
        Ok(resp.list)
    }

    pub async fn update_task_text(&self, list_id: &str, task_id: u32, text: &str) -> Result<TaskList, ApiError> {
        let req = self
            .http
            .put(self.list_url(list_id, &format!("/tasks/{task_id}")))
            .json(&TaskTextArgs { text });
        let resp: ListEnvelope = self.send(req, true).await?;
        Ok(resp.list)
    }

    pub async fn toggle_task(&self, list_id: &str, task_id: u32) -> Result<TaskList, ApiError> {
        let req = self
            .http
            .patch(self.list_url(list_id, &format!("/tasks/{task_id}/complete")));
        let resp: ListEnvelope = self.send(req, true).await?;
        Ok(resp.list)
    }

    pub async fn delete_task(&self, list_id: &str, task_id: u32) -> Result<(), ApiError> {
        let req = self
            .http
            .delete(self.list_url(list_id, &format!("/tasks/{task_id}")));
        self.send_empty(req, true).await
    }

    /// Persist a full ordering in one request; returns the server-confirmed
    /// list with its recomputed completion percentage
    pub async fn reorder(&self, list_id: &str, task_ids: &[u32]) -> Result<TaskList, ApiError> {
        let req = self
            .http
            .put(self.list_url(list_id, "/reorder"))
            .json(&ReorderArgs { task_ids });
        let resp: ListEnvelope = self.send(req, true).await?;
        Ok(resp.list)
    }

    // ---- transport ----

    async fn send<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        intercept_unauthorized: bool,
    ) -> Result<T, ApiError> {
        let resp = self.dispatch(req, intercept_unauthorized).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_empty(
        &self,
        req: reqwest::RequestBuilder,
        intercept_unauthorized: bool,
    ) -> Result<(), ApiError> {
        self.dispatch(req, intercept_unauthorized).await.map(|_| ())
    }

    async fn dispatch(
        &self,
        req: reqwest::RequestBuilder,
        intercept_unauthorized: bool,
    ) -> Result<reqwest::Response, ApiError> {
        let req = match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED && intercept_unauthorized {
            web_sys::console::log_1(&"[API] 401 response, invalidating session".into());
            self.on_unauthorized.run(());
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.msg)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 422,
            message: "Task text is required".to_string(),
        };
        assert_eq!(err.user_message("Failed to add task"), "Task text is required");

        let err = ApiError::Network("fetch aborted".to_string());
        assert_eq!(err.user_message("Failed to add task"), "Failed to add task");
    }

    #[test]
    fn test_list_id_is_escaped_in_paths() {
        let encoded = utf8_percent_encode("a/b c", SEGMENT).to_string();
        assert_eq!(encoded, "a%2Fb%20c");
    }
}
