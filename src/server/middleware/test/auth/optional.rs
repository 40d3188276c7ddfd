use super::*;

/// Tests resolving the caller from a valid token.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn resolves_authenticated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_admin(db).await?;
    let headers = bearer_for(&tokens, &user);

    let caller = AuthGuard::new(db, &tokens, &headers).optional().await?;

    assert_eq!(caller.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that anonymous and invalid callers are treated alike.
///
/// Expected: Ok(None) without a header and with a bad token
#[tokio::test]
async fn treats_missing_or_invalid_token_as_anonymous() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let anonymous = HeaderMap::new();
    let invalid = headers_with("Bearer not-a-jwt");

    assert!(AuthGuard::new(db, &tokens, &anonymous)
        .optional()
        .await?
        .is_none());
    assert!(AuthGuard::new(db, &tokens, &invalid)
        .optional()
        .await?
        .is_none());

    Ok(())
}
