use axum::{extract::State, Json};

use crate::{
    model::Signup,
    web::{data::ApiResponse, WebResult},
    AppState,
};

#[tracing::instrument(name = "Listing marketing signups", skip(app_state))]
pub async fn signups_list(
    State(app_state): State<AppState>,
) -> WebResult<Json<ApiResponse<Vec<Signup>>>> {
    let signups = app_state.database_mgr.list_signups().await?;

    Ok(Json(ApiResponse::data(signups)))
}
