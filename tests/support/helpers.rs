// tests/support/helpers.rs
use axum::{body, http::StatusCode, response::IntoResponse};
use serde_json::Value;
use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicUsize, Ordering},
};
use tokio_util::sync::CancellationToken;

/// 呼び出し回数を数える共有カウンタ
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// 受け取ったキャンセルトークンを一度だけ記録する
#[derive(Clone, Default)]
pub struct TokenSlot(Arc<OnceLock<CancellationToken>>);

impl TokenSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, token: &CancellationToken) {
        let _ = self.0.set(token.clone());
    }

    pub fn recorded(&self) -> Option<CancellationToken> {
        self.0.get().cloned()
    }
}

/// レスポンスを JSON として読み出し、ステータスを確認する
pub async fn problem_json(resp: impl IntoResponse, expected_status: StatusCode) -> Value {
    let resp = resp.into_response();
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&body_bytes).expect("expected valid json body for problem")
}
