use serde_json::Value;

use crate::fixtures::COURSE_ID;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    // GIVEN
    let context = TestContext::new_with_token("").await;

    // WHEN
    let resp = context
        .api
        .credential_builder(COURSE_ID, &[("username", "alice")])
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await;
    assert_eq!(body["code"], "BR_0010");
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    // GIVEN
    let context = TestContext::new_with_token("no-such-session").await;

    // WHEN
    let resp = context
        .api
        .credential_builder(COURSE_ID, &[("username", "alice")])
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await;
    assert_eq!(body["code"], "BR_0010");
    assert_eq!(
        body["message"],
        "Authentication credentials were not provided or are invalid."
    );
}

#[tokio::test]
async fn test_learner_is_forbidden() {
    // GIVEN
    let context = TestContext::new_with_token("alice-token").await;

    // WHEN
    let resp = context
        .api
        .credential_builder(COURSE_ID, &[("username", "alice")])
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    let body: Value = resp.json().await;
    assert_eq!(body["code"], "BR_0005");
    assert_eq!(
        body["message"],
        "The user does not have access to generate credentials."
    );
}

#[tokio::test]
async fn test_course_instructor_is_allowed() {
    // GIVEN
    let context = TestContext::new_with_token("instructor-token").await;

    // WHEN
    let resp = context
        .api
        .credential_builder(COURSE_ID, &[("username", "alice"), ("to_file", "false")])
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_instructor_of_other_course_is_forbidden() {
    // GIVEN
    let context = TestContext::new_with_token("instructor-token").await;

    // WHEN
    let resp = context
        .api
        .credential_builder(crate::fixtures::EMPTY_COURSE_ID, &[])
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
}
