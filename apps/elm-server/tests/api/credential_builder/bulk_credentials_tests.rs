use serde_json::Value;
use similar_asserts::assert_eq;

use crate::fixtures::{COURSE_ID, EMPTY_COURSE_ID};
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_bulk_credentials_archive() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.credential_builder(COURSE_ID, &[]).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("content-type").unwrap(), "application/zip");
    assert_eq!(
        resp.header("content-disposition").unwrap(),
        "attachment; filename=\"credentials-course-v1_OpenedX+DemoX+2024.zip\""
    );

    let entries = resp.zip_entries().await;
    let names: Vec<_> = entries.iter().map(|(name, _)| name.as_str()).collect();
    // bob has no certificate, staff is not a learner
    assert_eq!(
        names,
        vec![
            "credential-alice-course-v1_OpenedX+DemoX+2024.json",
            "credential-carol-course-v1_OpenedX+DemoX+2024.json",
        ]
    );

    let alice: Value = serde_json::from_str(&entries[0].1).unwrap();
    assert_eq!(
        alice["deliveryDetails"]["deliveryAddress"],
        "alice@example.com"
    );
}

#[tokio::test]
async fn test_bulk_credentials_ignore_to_file() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .credential_builder(COURSE_ID, &[("to_file", "false"), ("username", "  ")])
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("content-type").unwrap(), "application/zip");
    assert!(
        resp.header("content-disposition")
            .unwrap()
            .starts_with("attachment;")
    );
}

#[tokio::test]
async fn test_bulk_credentials_without_certificates() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.credential_builder(EMPTY_COURSE_ID, &[]).await;

    // THEN
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await;
    assert_eq!(body["code"], "BR_0004");
    assert_eq!(
        body["message"],
        "No credentials found for course_id='course-v1:OpenedX+Empty+2024'."
    );
}
