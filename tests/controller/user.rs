use txfetch_test_utils::fixtures::eth::factory::mock_transfer;

use super::*;

/// Expect 401 without a token
#[tokio::test]
async fn rejects_anonymous_request() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let (status, body) = send(app(&test), get("/api/my")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid credentials");

    Ok(())
}

/// Expect 401 for a token that does not validate
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let (status, _) = send(app(&test), get_with_token("/api/my", "not.a.token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect lookups made with a token to show up in the user's history only
#[tokio::test]
async fn returns_transactions_looked_up_by_user() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let alice = insert_user(&mut test, "alice").await?;
    let bob = insert_user(&mut test, "bob").await?;
    let stored = mock_transfer(0, 0);
    let fetched = mock_transfer(1, 0);
    test.eth().insert_mock_transaction(&stored.hash).await?;
    let _endpoints = test.eth().create_transaction_endpoints(&fetched, 1);

    let state = test.state::<AppState>();
    let alice_token = state.jwt.generate_token(alice).unwrap();
    let bob_token = state.jwt.generate_token(bob).unwrap();

    let uri = format!(
        "/api/eth?transactionHashes={}&transactionHashes={}",
        stored.hash, fetched.hash
    );
    let (status, _) = send(app(&test), get_with_token(&uri, &alice_token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app(&test), get_with_token("/api/my", &alice_token)).await;
    assert_eq!(status, StatusCode::OK);
    let mut hashes = response_hashes(&body);
    hashes.sort();
    let mut expected = vec![stored.hash, fetched.hash];
    expected.sort();
    assert_eq!(hashes, expected);

    let (status, body) = send(app(&test), get_with_token("/api/my", &bob_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(response_hashes(&body).is_empty());

    Ok(())
}

/// Expect an anonymous lookup with an invalid token to still succeed
#[tokio::test]
async fn invalid_token_does_not_block_lookup() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    test.eth().insert_mock_transaction("0x01").await?;

    let (status, body) = send(
        app(&test),
        get_with_token("/api/eth?transactionHashes=0x01", "garbage"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response_hashes(&body), vec!["0x01"]);

    Ok(())
}
