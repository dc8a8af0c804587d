use axum::http::StatusCode;
use chrono::NaiveDate;

use ourair_api::modules::donations::model::DonationBucket;

use crate::common::{memory::MemoryDonationRepository, TestContext};

fn bucket(y: i32, m: u32, d: u32, total: i64) -> DonationBucket {
    DonationBucket {
        period: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        total_donation: total,
    }
}

#[tokio::test]
async fn donation_stats_groups_totals_by_period() {
    let ctx = TestContext::builder()
        .donations(MemoryDonationRepository {
            daily: vec![bucket(2024, 6, 3, 50_000), bucket(2024, 6, 4, 125_000)],
            weekly: vec![bucket(2024, 6, 3, 175_000)],
            monthly: vec![bucket(2024, 6, 1, 175_000)],
        })
        .build();

    let response = ctx.server.get("/api/v1/donation").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], true);
    assert_eq!(body["message"], "success");

    let data = &body["data"];
    assert_eq!(data["dailyDonations"].as_array().unwrap().len(), 2);
    assert_eq!(data["dailyDonations"][1]["day"], "2024-06-04");
    assert_eq!(data["dailyDonations"][1]["total_donation"], "125000");
    assert_eq!(data["weeklyDonations"][0]["week"], "2024-06-03");
    assert_eq!(data["monthlyDonations"][0]["month"], "2024-06-01");
    assert_eq!(data["monthlyDonations"][0]["total_donation"], "175000");
}

#[tokio::test]
async fn donation_stats_without_transactions_are_empty() {
    let ctx = TestContext::new();

    let body: serde_json::Value = ctx.server.get("/api/v1/donation").await.json();

    assert!(body["data"]["dailyDonations"].as_array().unwrap().is_empty());
    assert!(body["data"]["weeklyDonations"].as_array().unwrap().is_empty());
    assert!(body["data"]["monthlyDonations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn donation_stats_when_storage_fails_returns_server_error() {
    let ctx = TestContext::builder().storage_down().build();

    ctx.server
        .get("/api/v1/donation")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
