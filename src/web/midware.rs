use std::sync::Arc;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::web::{log, Error};

/// Runs on every response. If a handler stashed an `Error` into the response
/// extensions this rebuilds the body into the client-facing envelope:
/// `{ "success": false, "message": <client message> }`.
pub async fn response_mapper(req_method: Method, uri: Uri, resp: Response) -> Response {
    let uuid = Uuid::new_v4();

    let web_error = resp.extensions().get::<Arc<Error>>().map(|er| er.as_ref());
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let client_error_body = json!({
            "success": false,
            "message": cl_err.to_string(),
        });

        (*status, Json(client_error_body)).into_response()
    });

    let _ = log::log_request(
        uuid,
        req_method,
        uri,
        resp.status(),
        web_error,
        client_status_and_error,
    )
    .await;

    err_resp.unwrap_or(resp)
}
