use crate::helpers::{GenerateTokenBody, TestContext, API_KEY, API_SECRET};
use chrono::{Duration, Utc};
use room_token_service::domain::{ErrorResponse, IssuedToken, PermissionSet, TokenResponse};
use room_token_service::services::{TokenIssuer, TokenVerifier};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_200_with_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .generate_token(&GenerateTokenBody::new("main-room", "user-42"))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response
        .json::<TokenResponse>()
        .await
        .expect("Could not deserialize response body to TokenResponse");
    assert_eq!(body.room_name, "main-room");
    assert_eq!(body.participant_name, "user-42");

    let verifier = TokenVerifier::new(API_KEY, API_SECRET.as_bytes()).unwrap();
    let claims = verifier.verify(&body.token).expect("token should verify");
    assert_eq!(claims.sub, "user-42");
    assert_eq!(claims.video.room, "main-room");
    assert!(claims.video.room_join);
    assert!(claims.video.can_publish);
    assert!(claims.video.can_subscribe);
    assert!(claims.video.can_publish_data);
    assert_eq!(claims.exp - claims.iat, 36_000);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_honour_explicit_grants(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let body = GenerateTokenBody {
        can_publish: Some(true),
        can_subscribe: Some(false),
        ..GenerateTokenBody::new("main-room", "viewer")
    };
    let response = app.generate_token(&body).await;
    assert_eq!(response.status().as_u16(), 200);

    let token = response.json::<TokenResponse>().await.unwrap().token;
    let summary = TokenIssuer::decode_for_display(&token).unwrap();
    assert!(summary.grants.can_publish);
    assert!(!summary.grants.can_subscribe);
    assert!(summary.grants.can_publish_data);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_400_if_names_missing(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let test_cases = [
        GenerateTokenBody::new("", "alice"),
        GenerateTokenBody::new("room1", ""),
        GenerateTokenBody::new("   ", "alice"),
    ];

    for body in test_cases {
        let response = app.generate_token(&body).await;
        assert_eq!(response.status().as_u16(), 400);

        let error = response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialize response body to ErrorResponse");
        assert_eq!(error.error, "Room name and participant name are required");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_400_if_malformed_json(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .post(format!("{}/api/token/generate", &app.address))
        .bearer_auth(crate::helpers::ADMIN_KEY)
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute generate token request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_without_admin_key(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .post(format!("{}/api/token/generate", &app.address))
        .json(&GenerateTokenBody::new("room1", "alice"))
        .send()
        .await
        .expect("Failed to execute generate token request.");
    assert_eq!(response.status().as_u16(), 401);

    let response = app
        .generate_token_with_key(&GenerateTokenBody::new("room1", "alice"), "wrong-admin-key")
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_record_issued_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .generate_token(&GenerateTokenBody::new("room1", "alice"))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let token = response.json::<TokenResponse>().await.unwrap().token;

    let issued = app.app_state.issued_tokens.read().await;
    assert_eq!(issued.len(), 1);
    let active = issued.active(chrono::Utc::now());
    let entry = &active[0];
    assert_eq!(entry.token, token);
    assert_eq!(entry.room_name, "room1");
    assert_eq!(entry.participant_name, "alice");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_drop_expired_entries_when_recording(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let generated_at = Utc::now() - Duration::hours(2);
    app.app_state.issued_tokens.write().await.record(IssuedToken::new(
        "stale-token".to_owned(),
        "room1".to_owned(),
        "bob".to_owned(),
        PermissionSet::default(),
        generated_at,
        generated_at + Duration::hours(1),
    ));

    let response = app
        .generate_token(&GenerateTokenBody::new("room1", "alice"))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let issued = app.app_state.issued_tokens.read().await;
    assert_eq!(issued.len(), 1);
    let active = issued.active(Utc::now());
    assert_eq!(active[0].participant_name, "alice");
}
