use serde_json::Value;
use similar_asserts::assert_eq;

use crate::fixtures::COURSE_ID;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_single_credential_as_attachment() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .credential_builder(COURSE_ID, &[("username", "alice")])
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("content-type").unwrap(), "application/json");
    assert_eq!(
        resp.header("content-disposition").unwrap(),
        "attachment; filename=\"credential-alice-course-v1_OpenedX+DemoX+2024.json\""
    );

    let body: Value = resp.json().await;
    let credential = &body["credential"];
    assert_eq!(
        credential["credentialSchema"]["id"],
        "http://data.europa.eu/snb/model/ap/edc-generic-full"
    );
    assert_eq!(credential["issuer"]["id"], "urn:epass:org:test-issuer");
    assert_eq!(credential["issued"], credential["validFrom"]);
    assert!(credential.get("validUntil").is_none());

    let subject = &credential["credentialSubject"];
    assert_eq!(subject["givenName"]["en"], "Alice");
    assert_eq!(subject["familyName"]["en"], "Liddell");
    assert_eq!(
        subject["hasClaim"]["awardedBy"]["awardingDate"],
        "2024-01-15T10:30:45+00:00"
    );
    assert_eq!(
        subject["hasClaim"]["provenBy"]["grade"]["noteLiteral"]["en"],
        "87.65"
    );
    assert_eq!(
        subject["hasClaim"]["awardedBy"]["awardingBody"]["location"]["address"]["countryCode"]
            ["id"],
        "http://publications.europa.eu/resource/authority/country/PRT"
    );
    assert_eq!(
        credential["displayParameter"]["primaryLanguage"]["id"],
        "http://publications.europa.eu/resource/authority/language/SPA"
    );
    assert_eq!(
        body["deliveryDetails"]["deliveryAddress"],
        "alice@example.com"
    );
}

#[tokio::test]
async fn test_single_credential_inline_by_email_with_expiry() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .credential_builder(
            COURSE_ID,
            &[
                ("username", "ALICE@example.com"),
                ("to_file", "false"),
                ("expires_at", "2030-06-30T12:00:00+02:00"),
            ],
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.header("content-disposition").unwrap(),
        "inline; filename=\"credential-alice-course-v1_OpenedX+DemoX+2024.json\""
    );

    let body: Value = resp.json().await;
    assert_eq!(
        body["credential"]["validUntil"],
        "2030-06-30T12:00:00+02:00"
    );
    assert_eq!(
        body["credential"]["expirationDate"],
        "2030-06-30T12:00:00+02:00"
    );
}

#[tokio::test]
async fn test_single_credential_without_grade() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .credential_builder(COURSE_ID, &[("username", "carol"), ("to_file", "0")])
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await;
    let assessment = &body["credential"]["credentialSubject"]["hasClaim"]["provenBy"];
    assert!(assessment.get("grade").is_none());
    assert_eq!(
        body["credential"]["credentialSubject"]["familyName"]["en"],
        ""
    );
}

#[tokio::test]
async fn test_unknown_course_is_not_found() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .credential_builder("course-v1:OpenedX+Missing+2024", &[("username", "alice")])
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await;
    assert_eq!(body["code"], "BR_0001");
    assert_eq!(
        body["message"],
        "The course with course_id='course-v1:OpenedX+Missing+2024' is not found."
    );
    assert_eq!(
        body["fieldErrors"]["course_id"],
        "The course with course_id='course-v1:OpenedX+Missing+2024' is not found."
    );
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .credential_builder(COURSE_ID, &[("username", "nobody")])
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await;
    assert_eq!(body["code"], "BR_0002");
    assert_eq!(body["message"], "The username='nobody' does not exist.");
}

#[tokio::test]
async fn test_missing_certificate_is_not_found() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .credential_builder(COURSE_ID, &[("username", "bob")])
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await;
    assert_eq!(body["code"], "BR_0003");
    assert_eq!(
        body["message"],
        "The user bob does not have certificate for course_id='course-v1:OpenedX+DemoX+2024'."
    );
}

#[tokio::test]
async fn test_invalid_parameters_are_rejected() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .credential_builder(
            "not-a-course",
            &[("expires_at", "tomorrow"), ("to_file", "maybe")],
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await;
    assert_eq!(body["code"], "BR_0084");
    let field_errors = body["fieldErrors"].as_object().unwrap();
    assert_eq!(
        field_errors.keys().collect::<Vec<_>>(),
        vec!["course_id", "expires_at", "to_file"]
    );
    assert_eq!(
        field_errors["course_id"],
        "The supplied course_id='not-a-course' key is not valid."
    );
}
