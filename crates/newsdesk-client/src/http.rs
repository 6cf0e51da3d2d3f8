//! `reqwest` implementation of [`NewsApi`]

use std::time::Duration;

use newsdesk_core::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::NewsApi;
use crate::endpoints::Endpoints;
use crate::protocol::{
    ChatRequest, ChatResponse, SubscribeRequest, SubscribeResponse, SummaryResponse,
};

/// Default time allowed for one request before it counts as failed
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Talks to the collaborator services over HTTP.
#[derive(Debug, Clone)]
pub struct HttpNewsApi {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpNewsApi {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn post_json<B, R>(&self, url: &Url, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        read_json(url, response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, url: &Url) -> Result<R> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        read_json(url, response).await
    }
}

async fn read_json<R: DeserializeOwned>(url: &Url, response: reqwest::Response) -> Result<R> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::http_status(status.as_u16(), url.path()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::http(e.to_string()))?;
    let parsed = serde_json::from_slice(&bytes)?;
    trace!("{} answered {} ({} bytes)", url.path(), status, bytes.len());
    Ok(parsed)
}

impl NewsApi for HttpNewsApi {
    async fn subscribe(&self, email: &str) -> Result<String> {
        let url = self.endpoints.subscribe();
        let body = SubscribeRequest {
            email: email.to_string(),
        };

        let response: SubscribeResponse = self.post_json(url, &body).await?;
        let message = response
            .message
            .ok_or_else(|| Error::missing_field(url.path(), "message"))?;

        info!("Subscription request accepted");
        Ok(message)
    }

    async fn chat(&self, question: &str, backend: &str) -> Result<String> {
        let url = self.endpoints.chat();
        let body = ChatRequest {
            question: question.to_string(),
            backend: backend.to_string(),
        };

        let response: ChatResponse = self.post_json(url, &body).await?;
        let reply = response
            .response
            .ok_or_else(|| Error::missing_field(url.path(), "response"))?;

        info!("Chat reply received ({} chars, backend={})", reply.len(), backend);
        Ok(reply)
    }

    async fn summarize(&self) -> Result<Option<String>> {
        let url = self.endpoints.summarize();
        let response: SummaryResponse = self.get_json(url).await?;

        match &response.summary {
            Some(summary) => info!("Summary received ({} chars)", summary.len()),
            None => info!("Summary response had no summary"),
        }
        Ok(response.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn api_for(base: &str) -> HttpNewsApi {
        let endpoints = Endpoints::parse(base, base).unwrap();
        HttpNewsApi::new(endpoints, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_chat_sends_question_and_backend() {
        let app = Router::new().route(
            "/chat",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["question"], "Hello");
                assert_eq!(body["backend"], "groq");
                Json(json!({"response": "Hi there"}))
            }),
        );
        let base = spawn_server(app).await;

        let reply = api_for(&base).chat("Hello", "groq").await.unwrap();
        assert_eq!(reply, "Hi there");
    }

    #[tokio::test]
    async fn test_chat_missing_response_field_fails() {
        let app = Router::new().route("/chat", post(|| async { Json(json!({"answer": "x"})) }));
        let base = spawn_server(app).await;

        let err = api_for(&base).chat("Hello", "groq").await.unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[tokio::test]
    async fn test_non_success_status_fails() {
        let app = Router::new().route(
            "/chat",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"response": "boom"}))) }),
        );
        let base = spawn_server(app).await;

        let err = api_for(&base).chat("Hello", "groq").await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_fails() {
        let app = Router::new().route("/chat", post(|| async { "not json" }));
        let base = spawn_server(app).await;

        let err = api_for(&base).chat("Hello", "groq").await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_subscribe_returns_server_message() {
        let app = Router::new().route(
            "/subscribe",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"email": "reader@example.com"}));
                Json(json!({"message": "Subscribed!"}))
            }),
        );
        let base = spawn_server(app).await;

        let message = api_for(&base).subscribe("reader@example.com").await.unwrap();
        assert_eq!(message, "Subscribed!");
    }

    #[tokio::test]
    async fn test_subscribe_without_message_fails() {
        let app = Router::new().route("/subscribe", post(|| async { Json(json!({})) }));
        let base = spawn_server(app).await;

        let err = api_for(&base).subscribe("reader@example.com").await.unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[tokio::test]
    async fn test_summarize_variants() {
        let app = Router::new()
            .route("/summarize", get(|| async { Json(json!({"summary": "# News"})) }));
        let base = spawn_server(app).await;
        assert_eq!(
            api_for(&base).summarize().await.unwrap(),
            Some("# News".to_string())
        );

        let app = Router::new().route("/summarize", get(|| async { Json(json!({"summary": null})) }));
        let base = spawn_server(app).await;
        assert_eq!(api_for(&base).summarize().await.unwrap(), None);

        let app = Router::new().route("/summarize", get(|| async { Json(json!({})) }));
        let base = spawn_server(app).await;
        assert_eq!(api_for(&base).summarize().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unreachable_service_fails() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = api_for(&format!("http://{addr}"))
            .summarize()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_failure() {
        let app = Router::new().route(
            "/summarize",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"summary": "late"}))
            }),
        );
        let base = spawn_server(app).await;
        let endpoints = Endpoints::parse(&base, &base).unwrap();
        let api = HttpNewsApi::new(endpoints, Duration::from_millis(200)).unwrap();

        let err = api.summarize().await.unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
    }
}
