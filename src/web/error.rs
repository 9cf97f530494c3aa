use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("data parsing error: {0}")]
    DataParsing(#[from] super::data::DataParsingError),

    #[error("model error: {0}")]
    Model(#[from] crate::model::Error),

    #[error("error awaiting a blocking tokio task: {0}")]
    TokioJoin(#[from] tokio::task::JoinError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Maps the server-side error to the status code and message the caller
    /// is allowed to see. Everything that isn't a validation failure
    /// collapses into a generic service error.
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::DataParsing(data_er) => {
                (StatusCode::BAD_REQUEST, InvalidInput(data_er.to_string()))
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a placeholder response and stash the error into it so the
        // response mapper can shape the client-facing body later.
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("{_0}")]
    InvalidInput(String),
    #[display("Sorry, there was an error processing your request. Please try again.")]
    ServiceError,
}
