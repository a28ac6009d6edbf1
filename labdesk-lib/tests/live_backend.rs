//! Tests against a running backend.
//!
//! These tests are ignored by default. To run them, start the backend and
//! create a `.env` file in the labdesk-lib directory with:
//!
//! ```env
//! LABDESK_BASE_URL=http://localhost:8080/api
//! ```
//!
//! Then run: `cargo test -p labdesk-lib -- --ignored`

use std::env;

use labdesk_lib::LabDeskClient;
use labdesk_lib::api::Resource;
use labdesk_lib::model::Discipline;
use labdesk_lib::model::DisciplinePayload;
use labdesk_lib::model::LabWork;
use labdesk_lib::page::EntityPage;
use labdesk_lib::page::LoadState;

fn client() -> Option<LabDeskClient> {
    let _ = dotenvy::dotenv();
    let url = env::var("LABDESK_BASE_URL").ok()?;
    LabDeskClient::builder().url(url).build().ok()
}

#[tokio::test]
#[ignore]
async fn test_list_every_resource() {
    let Some(client) = client() else {
        eprintln!("Skipping: LABDESK_BASE_URL not set");
        return;
    };

    for &resource in Resource::ALL {
        let rows: Vec<serde_json::Value> = client.list(resource).await.unwrap();
        println!("{resource}: {} rows", rows.len());
    }
}

#[tokio::test]
#[ignore]
async fn test_discipline_round_trip() {
    let Some(client) = client() else {
        eprintln!("Skipping: LABDESK_BASE_URL not set");
        return;
    };

    let payload = DisciplinePayload {
        name: "Integration".to_string(),
        practice_hours: 2,
        labs_count: 1,
    };
    let created: Discipline = client.create(Resource::Disciplines, &payload).await.unwrap();
    let fetched: Discipline = client.retrieve(Resource::Disciplines, created.id).await.unwrap();
    assert_eq!(fetched, created);

    client.delete(Resource::Disciplines, created.id).await.unwrap();
    let missing = client
        .retrieve::<Discipline>(Resource::Disciplines, created.id)
        .await
        .unwrap_err();
    assert!(missing.is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_lab_work_page_loads() {
    let Some(client) = client() else {
        eprintln!("Skipping: LABDESK_BASE_URL not set");
        return;
    };

    let mut page: EntityPage<LabWork, _> = EntityPage::new(client);
    page.mount().await;
    assert_eq!(page.load_state(), &LoadState::Ready);

    let sum = page.backend().minimal_point_sum().await.unwrap();
    let expected: i64 = page.canonical().iter().map(|w| w.minimal_point).sum();
    assert_eq!(sum.sum, expected as f64);
}
