mod common;

use anyhow::Result;
use reqwest::redirect::Policy;
use reqwest::StatusCode;

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("client")
}

#[tokio::test]
async fn dashboard_without_token_redirects_to_login() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = no_redirect_client();

    let res = client
        .get(format!("{}/dashboard", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = res
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/?auth=login");
    Ok(())
}

#[tokio::test]
async fn dashboard_with_garbage_token_redirects_to_login() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = no_redirect_client();

    let res = client
        .get(format!("{}/dashboard/settings", server.base_url))
        .header("cookie", "token=not-a-real-token")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    Ok(())
}

#[tokio::test]
async fn list_item_prefix_is_also_guarded() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = no_redirect_client();

    let res = client
        .get(format!("{}/list-item", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    Ok(())
}

#[tokio::test]
async fn me_without_token_is_unauthorized_not_redirected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = no_redirect_client();

    let res = client
        .get(format!("{}/api/auth/me", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert!(
        body.get("message").is_some(),
        "error body should carry a message field: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn create_item_without_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = no_redirect_client();

    let res = client
        .post(format!("{}/api/items", server.base_url))
        .json(&serde_json::json!({
            "title": "Desk lamp",
            "description": "Warm white",
            "category_id": 1,
            "condition": "good",
            "availability_type": "free"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
