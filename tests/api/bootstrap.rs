use anyhow::Result;
use serde_json::json;

use crate::helpers::TestApp;

/// `TestApp::spawn` already ran the bootstrap once; running it again must
/// neither error nor touch existing rows.
#[tokio::test]
async fn bootstrap_is_idempotent() -> Result<()> {
    let app = TestApp::spawn().await?;

    app.post_signup(&json!({ "contact": "jane@example.com" }))
        .await?;

    app.mm.bootstrap().await?;
    app.mm.bootstrap().await?;

    assert_eq!(app.signup_count().await?, 1);

    let (contact_info,): (String,) =
        sqlx::query_as("SELECT contact_info FROM marketing_signups")
            .fetch_one(app.mm.db())
            .await?;
    assert_eq!(contact_info, "jane@example.com");

    Ok(())
}
