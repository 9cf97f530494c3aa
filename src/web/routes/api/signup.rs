use axum::{extract::State, Json};
use tracing::info;

use crate::{
    model::Signup,
    web::{
        data::{ApiResponse, DeserSignup},
        WebResult,
    },
    AppState,
};

const SIGNUP_THANKS_MSG: &str = "Thank you for signing up! You'll receive updates soon.";

#[tracing::instrument(name = "Saving new marketing signup", skip(app_state, signup))]
pub async fn signup(
    State(app_state): State<AppState>,
    Json(signup): Json<DeserSignup>,
) -> WebResult<Json<ApiResponse<Signup>>> {
    let contact = tokio::task::spawn_blocking(move || signup.try_into()).await??;

    let record = app_state.database_mgr.insert_signup(&contact).await?;
    info!("New signup successfully stored.");

    Ok(Json(ApiResponse::data_with_message(
        record,
        SIGNUP_THANKS_MSG,
    )))
}
