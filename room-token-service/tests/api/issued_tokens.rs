use crate::helpers::{GenerateTokenBody, TestContext};
use chrono::{Duration, Utc};
use room_token_service::domain::{IssuedToken, IssuedTokensResponse, PermissionSet};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_list_only_active_tokens(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    for name in ["alice", "bob"] {
        let response = app.generate_token(&GenerateTokenBody::new("room1", name)).await;
        assert_eq!(response.status().as_u16(), 200);
    }

    // An entry that is already past its expiry.
    let past = Utc::now() - Duration::hours(11);
    app.app_state.issued_tokens.write().await.record(IssuedToken::new(
        "stale.token.value".into(),
        "room1".into(),
        "carol".into(),
        PermissionSet::default(),
        past,
        past + Duration::hours(10),
    ));

    let response = app.list_issued().await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<IssuedTokensResponse>().await.unwrap();
    let names: Vec<_> = body.tokens.iter().map(|t| t.participant_name.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);

    // Listing prunes the expired entry.
    assert_eq!(app.app_state.issued_tokens.read().await.len(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_delete_entry_by_id(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.generate_token(&GenerateTokenBody::new("room1", "alice")).await;
    assert_eq!(response.status().as_u16(), 200);

    let listed = app
        .list_issued()
        .await
        .json::<IssuedTokensResponse>()
        .await
        .unwrap();
    let id = listed.tokens[0].id.to_string();

    assert_eq!(app.delete_issued(&id).await.status().as_u16(), 204);
    assert_eq!(app.delete_issued(&id).await.status().as_u16(), 404);

    let listed = app
        .list_issued()
        .await
        .json::<IssuedTokensResponse>()
        .await
        .unwrap();
    assert!(listed.tokens.is_empty());
}
