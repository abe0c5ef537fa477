use serde_json::json;

use super::*;

fn authenticate_request(username: &str, password: &str) -> Request<Body> {
    Request::post("/api/authenticate")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap()
}

/// Expect a token for valid credentials
#[tokio::test]
async fn issues_token() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    insert_user(&mut test, "alice").await?;

    let (status, body) = send(app(&test), authenticate_request("alice", "alice")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap().is_empty());

    Ok(())
}

/// Expect 401 with a generic message for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    insert_user(&mut test, "alice").await?;

    let (status, body) = send(app(&test), authenticate_request("alice", "bob")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid credentials");

    Ok(())
}

/// Expect the same 401 for an unknown user
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let (status, body) = send(app(&test), authenticate_request("mallory", "mallory")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid credentials");

    Ok(())
}
