mod common;

use common::*;
use user_roster::config::FetchConfig;
use user_roster::fetch::{AlwaysFail, FetchKind, NeverFail, RandomFailure, UserService};
use user_roster::model::sample_users;

#[tokio::test(start_paused = true)]
async fn normal_path_returns_the_four_records_in_order() {
    let users = make_service(NeverFail).fetch_users().await.unwrap();
    let records: Vec<(u32, &str, &str, &str)> = users
        .iter()
        .map(|u| (u.id(), u.name(), u.email(), u.role()))
        .collect();
    assert_eq!(
        records,
        vec![
            (1, "Ana García", "ana@ejemplo.com", "Desarrolladora Flutter"),
            (2, "Carlos Ruiz", "carlos@ejemplo.com", "Diseñador UI/UX"),
            (3, "María López", "maria@ejemplo.com", "Product Manager"),
            (4, "Juan Pérez", "juan@ejemplo.com", "Backend Developer"),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn failing_path_always_fails() {
    for service in [make_service(NeverFail), make_service(AlwaysFail)] {
        let err = service.fetch(FetchKind::Failing).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "intentional error for demonstrating error handling"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn seeded_service_is_reproducible() {
    let config = FetchConfig {
        delay_ms: 10,
        failing_delay_ms: 10,
        failure_probability: 0.5,
        seed: Some(1234),
    };
    let a = UserService::from_config(&config);
    let b = UserService::from_config(&config);

    let mut outcomes_a = Vec::new();
    let mut outcomes_b = Vec::new();
    for _ in 0..20 {
        outcomes_a.push(a.fetch_users().await.is_ok());
        outcomes_b.push(b.fetch_users().await.is_ok());
    }
    assert_eq!(outcomes_a, outcomes_b);
    assert!(outcomes_a.contains(&true) && outcomes_a.contains(&false));
}

#[tokio::test(start_paused = true)]
async fn zero_probability_service_never_fails() {
    let service = make_service(RandomFailure::seeded(5, 0.0));
    for _ in 0..10 {
        assert_eq!(service.fetch_users().await.unwrap(), sample_users());
    }
}
