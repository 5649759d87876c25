use crate::config::ServerConfig;
use crate::submission::error::RequestError;
use crate::submission::reply::{GenerateRequest, MovieCheck, MovieCheckRequest, RawReply};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, trace};

/// The generator service, as seen by the client.
#[async_trait]
pub trait ScriptBackend: Send + Sync {
    /// Post a generate request. Resolves as soon as a response head arrives,
    /// whatever its HTTP status. The body is read afterwards through the
    /// returned [`PendingReply`].
    async fn generate_script(
        &self,
        request: &GenerateRequest<'_>,
    ) -> Result<Box<dyn PendingReply>, RequestError>;

    /// Ask whether the service can find a script for `movie`.
    async fn check_movie(&self, movie: &str) -> Result<MovieCheck, RequestError>;
}

/// A response whose head has arrived but whose body has not been read.
#[async_trait]
pub trait PendingReply: Send {
    fn http_status(&self) -> u16;

    /// Read the whole body. A failure here is a [`RequestError::Decode`]: the
    /// request itself already resolved.
    async fn read_body(self: Box<Self>) -> Result<RawReply, RequestError>;
}

struct HttpReply {
    response: reqwest::Response,
}

#[async_trait]
impl PendingReply for HttpReply {
    fn http_status(&self) -> u16 {
        self.response.status().as_u16()
    }

    async fn read_body(self: Box<Self>) -> Result<RawReply, RequestError> {
        let http_status = self.http_status();
        let body = self
            .response
            .bytes()
            .await
            .map_err(|e| RequestError::Decode {
                status: http_status,
                message: e.to_string(),
            })?;
        trace!(status = http_status, bytes = body.len(), "generate reply");
        Ok(RawReply::new(http_status, body.to_vec()))
    }
}

pub struct HttpBackend {
    client: reqwest::Client,
    generate_url: String,
    check_url: String,
}

impl HttpBackend {
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            generate_url: join_url(&config.base_url, &config.generate_path),
            check_url: join_url(&config.base_url, &config.check_path),
        })
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[async_trait]
impl ScriptBackend for HttpBackend {
    async fn generate_script(
        &self,
        request: &GenerateRequest<'_>,
    ) -> Result<Box<dyn PendingReply>, RequestError> {
        debug!(url = %self.generate_url, movie = request.movie, "POST generate");

        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(&self.generate_url)
            .json(request)
            .send()
            .await?;

        Ok(Box::new(HttpReply { response }))
    }

    async fn check_movie(&self, movie: &str) -> Result<MovieCheck, RequestError> {
        debug!(url = %self.check_url, movie, "POST check");

        let response = self
            .client
            .post(&self.check_url)
            .json(&MovieCheckRequest { movie })
            .send()
            .await?;

        let http_status = response.status().as_u16();
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| RequestError::Decode {
            status: http_status,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn backend(base_url: &str) -> HttpBackend {
        HttpBackend::from_config(&ServerConfig {
            base_url: base_url.to_string(),
            ..ServerConfig::default()
        })
        .unwrap()
    }

    async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Json(json!({
            "status": "success",
            "received": body,
            "content_type": content_type,
        }))
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000/", "/generate_script"),
            "http://localhost:5000/generate_script"
        );
        assert_eq!(
            join_url("http://localhost:5000", "check_movie"),
            "http://localhost:5000/check_movie"
        );
    }

    async fn generate(base: &str, movie: &str, prompt: &str) -> Box<dyn PendingReply> {
        backend(base)
            .generate_script(&GenerateRequest { movie, prompt })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_posts_json_body() {
        let base = serve(Router::new().route("/generate_script", post(echo))).await;
        let reply = generate(&base, "Titanic", "ending where the hero wins")
            .await
            .read_body()
            .await
            .unwrap();

        assert_eq!(reply.http_status, 200);
        let payload = reply.decode().unwrap();
        assert_eq!(payload.text("content_type"), Some("application/json"));
        assert_eq!(
            payload.fields["received"],
            json!({"movie": "Titanic", "prompt": "ending where the hero wins"})
        );
    }

    #[tokio::test]
    async fn test_generate_returns_error_statuses_as_replies() {
        let app = Router::new().route(
            "/generate_script",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Generation failed: quota"})),
                )
            }),
        );
        let base = serve(app).await;
        let pending = generate(&base, "Alien", "Ripley stays").await;
        assert_eq!(pending.http_status(), 500);

        let reply = pending.read_body().await.unwrap();
        assert_eq!(reply.http_status, 500);
        assert_eq!(
            reply.decode(),
            Err(RequestError::Rejected {
                status: None,
                message: Some("Generation failed: quota".into()),
            })
        );
    }

    #[tokio::test]
    async fn test_generate_connection_closed_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and hang up without answering.
            while let Ok((stream, _)) = listener.accept().await {
                drop(stream);
            }
        });

        let result = backend(&format!("http://{}", addr))
            .generate_script(&GenerateRequest {
                movie: "Alien",
                prompt: "Ripley stays",
            })
            .await;
        assert!(matches!(result, Err(RequestError::Transport(_))));
    }

    #[tokio::test]
    async fn test_generate_truncated_body_is_decode_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            // Promise 100 bytes, send 5, hang up.
            let _ = stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                      Content-Length: 100\r\n\r\n{\"sta",
                )
                .await;
        });

        let pending = generate(&format!("http://{}", addr), "Alien", "Ripley stays").await;
        assert_eq!(pending.http_status(), 200);
        assert!(matches!(
            pending.read_body().await,
            Err(RequestError::Decode { status: 200, .. })
        ));
    }

    #[tokio::test]
    async fn test_check_movie_found_and_missing() {
        let app = Router::new().route(
            "/check_movie",
            post(|Json(body): Json<Value>| async move {
                let movie = body["movie"].as_str().unwrap_or_default().to_string();
                if movie == "Alien" {
                    (StatusCode::OK, Json(json!({"exists": true, "movie": movie})))
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({"exists": false, "error": "Movie not found on IMSDB"})),
                    )
                }
            }),
        );
        let base = serve(app).await;
        let backend = backend(&base);

        let found = backend.check_movie("Alien").await.unwrap();
        assert!(found.exists);
        assert_eq!(found.movie.as_deref(), Some("Alien"));

        let missing = backend.check_movie("Nope").await.unwrap();
        assert!(!missing.exists);
        assert_eq!(missing.error.as_deref(), Some("Movie not found on IMSDB"));
    }

    #[tokio::test]
    async fn test_check_movie_non_json_is_decode_error() {
        let app = Router::new().route("/check_movie", post(|| async { "not json" }));
        let base = serve(app).await;
        let result = backend(&base).check_movie("Alien").await;
        assert!(matches!(result, Err(RequestError::Decode { status: 200, .. })));
    }
}
