use std::collections::HashSet;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::helpers::TestApp;

#[tokio::test]
async fn api_signup_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_signup(&json!({ "contact": "jane@example.com" }))
        .await?;

    assert_eq!(
        res.status(),
        StatusCode::OK,
        "Wrong response StatusCode: {}",
        res.status()
    );

    let body: Value = res.json().await?;
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("Thank you for signing up! You'll receive updates soon.")
    );
    assert_eq!(body["data"]["contact_info"], json!("jane@example.com"));

    let (contact_info,): (String,) =
        sqlx::query_as("SELECT contact_info FROM marketing_signups")
            .fetch_one(app.mm.db())
            .await?;
    assert_eq!(contact_info, "jane@example.com");

    Ok(())
}

#[tokio::test]
async fn api_signup_stores_trimmed_contact() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_signup(&json!({ "contact": "  555-1234  " })).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["data"]["contact_info"], json!("555-1234"));

    let (contact_info,): (String,) =
        sqlx::query_as("SELECT contact_info FROM marketing_signups")
            .fetch_one(app.mm.db())
            .await?;
    assert_eq!(contact_info, "555-1234");

    Ok(())
}

#[tokio::test]
async fn api_signup_blank_contact_bad_request() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        (json!({ "contact": "" }), "Empty contact"),
        (json!({ "contact": "  " }), "Whitespace-only contact"),
        (json!({ "contact": null }), "Null contact"),
        (json!({}), "Missing contact"),
    ];

    for (body, description) in cases {
        let res = app.post_signup(&body).await?;
        assert_eq!(
            res.status(),
            StatusCode::BAD_REQUEST,
            "The API did not return a 400 BAD REQUEST, the payload was: {}.",
            description
        );

        let body: Value = res.json().await?;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Email or phone number is required"));
    }

    assert_eq!(app.signup_count().await?, 0, "No rows should be written!");

    Ok(())
}

#[tokio::test]
async fn api_signup_twice_stores_two_rows() -> Result<()> {
    let app = TestApp::spawn().await?;

    let first: Value = app
        .post_signup(&json!({ "contact": "555-1234" }))
        .await?
        .json()
        .await?;
    let second: Value = app
        .post_signup(&json!({ "contact": "555-1234" }))
        .await?
        .json()
        .await?;

    assert_ne!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(app.signup_count().await?, 2);

    let listed: Value = app.get_signups().await?.json().await?;
    let listed = listed["data"].as_array().expect("data should be an array");
    assert_eq!(listed.len(), 2);
    for record in listed {
        assert_eq!(record["contact_info"], json!("555-1234"));
    }

    Ok(())
}

#[tokio::test]
async fn api_signup_concurrent_requests_store_all_rows() -> Result<()> {
    let app = TestApp::spawn().await?;
    let n_signups = 5;

    let mut handles = Vec::new();
    for i in 0..n_signups {
        let client = app.http_client.clone();
        let addr = app.addr;
        handles.push(tokio::spawn(async move {
            client
                .post(format!("http://{addr}/api/signup"))
                .json(&json!({ "contact": format!("user{i}@example.com") }))
                .send()
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let res = handle.await??;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await?;
        ids.insert(body["data"]["id"].as_i64().expect("id should be a number"));
    }

    assert_eq!(ids.len(), n_signups, "Every row gets a unique id");
    assert_eq!(app.signup_count().await?, n_signups as i64);

    Ok(())
}
