use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use thiserror::Error;

use crate::{horoscope::UnknownSign, session::SessionError, types::ErrorBody};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("password is required")]
    MissingPassword,

    #[error("malformed request body: {0}")]
    MalformedBody(JsonRejection),

    #[error("wrong password")]
    WrongPassword,

    #[error("login is disabled")]
    LoginDisabled,

    #[error("date query parameter is required")]
    MissingDate,

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    UnknownSign(#[from] UnknownSign),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingPassword => StatusCode::BAD_REQUEST,
            AppError::MalformedBody(rejection) => rejection.status(),
            AppError::WrongPassword => StatusCode::UNAUTHORIZED,
            AppError::LoginDisabled => StatusCode::SERVICE_UNAVAILABLE,
            AppError::MissingDate | AppError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownSign(_) => StatusCode::BAD_REQUEST,
            AppError::Session(SessionError::MissingSecret) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Session(SessionError::Rng(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
