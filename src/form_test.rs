use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::routing::post;

use crate::config::FetchConfig;
use crate::fetch::{Endpoint, Fetcher};
use crate::validate;

async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn validation_runs_on_every_change() {
    let mut field = FormField::new(validate::email);

    field.set_value("bad-email");
    assert!(field.field_error().is_some());
    assert!(!field.is_valid());

    field.set_value("user@example.com");
    assert!(field.field_error().is_none());
    assert!(field.is_valid());
}

#[tokio::test]
async fn invalid_input_blocks_submission_and_issues_no_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let app = axum::Router::new().route(
        "/subscribe",
        post(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Json(serde_json::json!({"ok": true})) }
        }),
    );
    let base = serve(app).await;
    let fetcher = Fetcher::new(FetchConfig::default()).unwrap();

    let mut field = FormField::new(validate::email);
    field.set_value("bad-email");
    field
        .submit(|email| {
            let fetcher = fetcher.clone();
            let base = base.clone();
            async move {
                let endpoint = Endpoint::post(format!("{base}/subscribe"))
                    .json_body(serde_json::json!({"email": email}));
                fetcher.fetch_json::<serde_json::Value>(&endpoint).await?;
                Ok("subscribed".to_string())
            }
        })
        .await;

    assert!(matches!(
        field.submit_state().error(),
        Some(PanelError::Validation(_))
    ));
    assert!(field.field_error().is_some());
    assert_eq!(hits.load(Ordering::SeqCst), 0, "no network call may be issued");
}

#[tokio::test]
async fn valid_submission_records_success_message() {
    let mut field = FormField::new(validate::email);
    field.set_value("user@example.com");
    field
        .submit(|email| async move { Ok(format!("{email} subscribed")) })
        .await;

    assert_eq!(field.success_message(), Some("user@example.com subscribed"));
    assert!(!field.is_disabled());
}

#[tokio::test]
async fn action_error_is_surfaced_verbatim() {
    let mut field = FormField::new(validate::email);
    field.set_value("user@example.com");
    let action_err = PanelError::Response { status: 502, detail: "bad gateway".into() };
    let returned = action_err.clone();
    field.submit(|_| async move { Err(returned) }).await;

    assert_eq!(field.submit_state().error(), Some(&action_err));
    assert!(field.success_message().is_none());
}

#[tokio::test]
async fn reset_returns_submission_to_idle_but_keeps_value() {
    let mut field = FormField::new(validate::email);
    field.set_value("user@example.com");
    field.submit(|_| async move { Ok("done".to_string()) }).await;
    assert!(field.submit_state().is_settled());

    field.reset_submission();
    assert_eq!(*field.submit_state(), RequestState::Idle);
    assert_eq!(field.value(), "user@example.com");
}

#[tokio::test]
async fn submit_revalidates_stale_values() {
    // A validator closing over external state can change its answer
    // between change and submit; submit must re-check.
    let strict = Arc::new(AtomicUsize::new(0));
    let gate = Arc::clone(&strict);
    let mut field = FormField::new(move |v: &str| {
        if gate.load(Ordering::SeqCst) == 0 {
            Ok(())
        } else {
            validate::email(v)
        }
    });

    field.set_value("bad-email");
    assert!(field.field_error().is_none());

    strict.store(1, Ordering::SeqCst);
    field.submit(|_| async move { Ok("never".to_string()) }).await;
    assert!(matches!(
        field.submit_state().error(),
        Some(PanelError::Validation(_))
    ));
}
