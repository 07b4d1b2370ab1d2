// Demo activities backend
//
// A tiny axum server that answers `GET /activities` with fixture data shaped
// like the real backend's payload. Used by `--demo` mode, the `demo-api`
// subcommand, and the HTTP client tests.
//
// Run standalone with: cargo run -- demo-api --bind 127.0.0.1:3001

use anyhow::{Context, Result};
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Fixture payload served by the demo backend
pub fn fixture_activities() -> Value {
    json!([
        {
            "activity_id": 1,
            "artist": "YOASOBI",
            "activity_name": "ASIA TOUR 2025",
            "activity_date": "2025-01-18 19:00",
            "place": "臺北流行音樂中心"
        },
        {
            "activity_id": 2,
            "artist": "MAYDAY 五月天",
            "activity_name": "回到那一天 25週年",
            "activity_date": "2025-02-08 19:30",
            "place": "臺北大巨蛋"
        },
        {
            "activity_id": 3,
            "artist": "2026 WBC 世界棒球經典賽資格賽",
            "activity_name": "Pool A Day 1",
            "activity_date": "2025-02-21 18:00",
            "place": "新莊棒球場"
        },
        {
            "activity_id": 4,
            "artist": "2024 aespa LIVE TOUR",
            "activity_name": "SYNK : PARALLEL LINE",
            "activity_date": "2025-03-15 18:00",
            "place": "林口體育館"
        },
        {
            "activity_id": 5,
            "artist": "周杰倫",
            "activity_name": "嘉年華 世界巡迴演唱會",
            "activity_date": "2025-04-05 19:30",
            "place": "高雄世運主場館"
        },
        {
            "activity_id": 6,
            "artist": "怕胖團",
            "activity_name": "大團誕生",
            "activity_date": "2025-05-10 19:00",
            "place": "Legacy Taipei"
        },
        {
            "activity_id": 7,
            "artist": "蘇打綠",
            "activity_name": "二十週年",
            "activity_date": "2025-06-21 19:30",
            "place": "臺北小巨蛋"
        }
    ])
}

/// Build the demo router serving `activities` at `GET /activities`
pub fn router(activities: Value) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .with_state(Arc::new(activities))
}

async fn list_activities(State(activities): State<Arc<Value>>) -> Json<Value> {
    tracing::debug!("Demo backend: GET /activities");
    Json(activities.as_ref().clone())
}

/// Serve the fixture backend on `bind_addr` until `shutdown_rx` fires
pub async fn serve(bind_addr: SocketAddr, shutdown_rx: oneshot::Receiver<()>) -> Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind demo backend to {}", bind_addr))?;

    tracing::info!("Demo backend listening on {}", bind_addr);
    serve_listener(listener, shutdown_rx).await
}

async fn serve_listener(listener: TcpListener, shutdown_rx: oneshot::Receiver<()>) -> Result<()> {
    axum::serve(listener, router(fixture_activities()))
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
        })
        .await
        .context("Demo backend error")?;

    tracing::info!("Demo backend shut down gracefully");
    Ok(())
}

/// Demo backend running in the background on an ephemeral local port
pub struct DemoServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl DemoServer {
    /// Bind `127.0.0.1:0` and start serving fixture activities
    pub async fn spawn() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind demo backend")?;
        let addr = listener
            .local_addr()
            .context("Failed to read demo backend address")?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            if let Err(e) = serve_listener(listener, shutdown_rx).await {
                tracing::error!("{:#}", e);
            }
        });

        tracing::info!("Demo backend started on {}", addr);

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle,
        })
    }

    /// Base URL to hand to the activities client
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop serving and wait for the server task to finish
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // If the send fails, the server has already stopped
            let _ = tx.send(());
        }
        let _ = (&mut self.handle).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::decode_schedule;

    #[test]
    fn test_fixture_is_valid_schedule() {
        let decoded = decode_schedule(fixture_activities()).unwrap();
        assert_eq!(decoded.skipped, 0);
        assert_eq!(decoded.entries.len(), 7);
        assert_eq!(decoded.entries[4].name, "周杰倫 - 嘉年華 世界巡迴演唱會");
        assert_eq!(decoded.entries[4].image, "周杰倫.jpg");
    }

    #[tokio::test]
    async fn test_spawned_server_serves_activities() {
        let server = DemoServer::spawn().await.unwrap();
        let url = format!("{}/activities", server.base_url());

        let body: Value = reqwest::get(&url).await.unwrap().json().await.unwrap();
        assert_eq!(body, fixture_activities());

        server.shutdown().await;
    }
}
