//! End-to-end scenarios for the users screen: controller, reducer and
//! presentation switch driven through `App` on virtual time.

mod common;

use common::*;
use std::time::Duration;
use user_roster::fetch::{AlwaysFail, FetchKind, NeverFail};
use user_roster::ui::users::{OperationState, ViewDescriptor};

// -- initial load --------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn initialize_shows_loading_then_users() {
    let (mut app, mut rx) = make_app(NeverFail);
    assert!(matches!(app.view(), ViewDescriptor::Placeholder { .. }));

    app.start();
    assert!(matches!(app.view(), ViewDescriptor::Loading { .. }));

    settle_next(&mut app, &mut rx).await;
    match app.view() {
        ViewDescriptor::Users { header, rows, .. } => {
            assert_eq!(header, "4 users loaded");
            assert_eq!(rows.len(), 4);
            assert_eq!(rows[0].name, "Ana García");
            assert_eq!(rows[3].email, "juan@ejemplo.com");
        }
        other => panic!("expected Users, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn still_loading_before_delay_elapses() {
    let (mut app, mut rx) = make_app(NeverFail);
    app.start();

    let early = tokio::time::timeout(Duration::from_millis(2_900), rx.recv()).await;
    assert!(early.is_err(), "fetch settled before its delay");
    assert!(app.users().operation.is_pending());

    settle_next(&mut app, &mut rx).await;
    assert!(!app.users().operation.is_pending());
}

#[tokio::test(start_paused = true)]
async fn forced_failure_shows_connection_error() {
    let (mut app, mut rx) = make_app(AlwaysFail);
    app.start();
    settle_next(&mut app, &mut rx).await;

    let view = app.view();
    assert!(view.has_retry());
    match view {
        ViewDescriptor::Failed { message, .. } => {
            assert_eq!(message, "connection error: could not reach server");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

// -- error simulation ----------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn simulate_error_settles_after_two_units() {
    let (mut app, mut rx) = make_app(NeverFail);
    app.start();
    settle_next(&mut app, &mut rx).await;

    let started = tokio::time::Instant::now();
    app.simulate_error();
    assert!(matches!(app.view(), ViewDescriptor::Loading { .. }));

    settle_next(&mut app, &mut rx).await;
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_secs(3));
    match app.view() {
        ViewDescriptor::Failed {
            message,
            retry_label,
            ..
        } => {
            assert_eq!(message, "intentional error for demonstrating error handling");
            assert_eq!(retry_label, "Retry");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn retry_from_error_view_reloads() {
    let (mut app, mut rx) = make_app(NeverFail);
    app.simulate_error();
    settle_next(&mut app, &mut rx).await;
    assert!(app.view().has_retry());

    app.activate();
    let operation = app.users().operation.operation().expect("operation");
    assert_eq!(operation.kind(), FetchKind::Normal);
    assert!(matches!(app.view(), ViewDescriptor::Loading { .. }));

    settle_next(&mut app, &mut rx).await;
    assert!(matches!(app.view(), ViewDescriptor::Users { .. }));
}

// -- superseded operations -----------------------------------------------------

#[tokio::test(start_paused = true)]
async fn reload_while_pending_ignores_older_result() {
    let (mut app, mut rx) = make_app(NeverFail);
    app.start();
    let first = app.users().operation.operation().expect("first");

    tokio::time::sleep(Duration::from_secs(1)).await;
    app.reload();
    let second = app.users().operation.operation().expect("second");
    assert_ne!(first, second);

    // First operation settles at t=3s while the second is still pending.
    settle_next(&mut app, &mut rx).await;
    assert_eq!(
        app.users().operation,
        OperationState::Pending { operation: second }
    );

    settle_next(&mut app, &mut rx).await;
    assert_eq!(app.users().operation.operation(), Some(second));
    assert!(matches!(app.view(), ViewDescriptor::Users { .. }));
}

#[tokio::test(start_paused = true)]
async fn late_success_does_not_hide_newer_error() {
    let (mut app, mut rx) = make_app(NeverFail);
    app.start();
    app.simulate_error();

    // Failing fetch (2s) settles before the normal one (3s).
    settle_next(&mut app, &mut rx).await;
    assert!(app.view().has_retry());

    settle_next(&mut app, &mut rx).await;
    assert!(app.view().has_retry());
}

// -- row interaction -----------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn selecting_a_row_shows_transient_acknowledgement() {
    let (mut app, mut rx) = make_app(NeverFail);
    app.start();
    settle_next(&mut app, &mut rx).await;

    app.select_next();
    app.select_next();
    app.activate();
    match app.view() {
        ViewDescriptor::Users { toast, rows, .. } => {
            assert!(rows[2].selected);
            assert_eq!(toast.as_deref(), Some("Selected: María López"));
        }
        other => panic!("expected Users, got {other:?}"),
    }

    // toast_ticks = 3 in the test config
    for _ in 0..3 {
        app.on_tick();
    }
    match app.view() {
        ViewDescriptor::Users { toast, .. } => assert!(toast.is_none()),
        other => panic!("expected Users, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn reload_drops_acknowledgement_of_old_list() {
    let (mut app, mut rx) = make_app(NeverFail);
    app.start();
    settle_next(&mut app, &mut rx).await;

    app.select_next();
    app.activate();
    assert!(app.users().toast.is_some());
    app.reload();
    settle_next(&mut app, &mut rx).await;

    match app.view() {
        ViewDescriptor::Users { toast, rows, .. } => {
            assert!(rows[0].selected);
            assert!(toast.is_none());
        }
        other => panic!("expected Users, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn view_is_stable_between_events() {
    let (mut app, mut rx) = make_app(NeverFail);
    app.start();
    settle_next(&mut app, &mut rx).await;
    assert_eq!(app.view(), app.view());
}
