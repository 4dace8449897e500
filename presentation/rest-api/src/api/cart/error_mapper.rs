use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

pub const STOCK_EXCEEDED_MESSAGE: &str = "requested quantity exceeds stock";
pub const ADD_FAILED_MESSAGE: &str = "failed to add product";
pub const REMOVE_FAILED_MESSAGE: &str = "failed to remove product";
pub const CHANGE_AMOUNT_FAILED_MESSAGE: &str = "failed to change product quantity";

/// Cart operation that produced an error; selects the generic notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    ChangeAmount,
}

impl CartOperation {
    fn failure_message(self) -> &'static str {
        match self {
            CartOperation::Add => ADD_FAILED_MESSAGE,
            CartOperation::Remove => REMOVE_FAILED_MESSAGE,
            CartOperation::ChangeAmount => CHANGE_AMOUNT_FAILED_MESSAGE,
        }
    }
}

#[derive(Debug)]
pub struct CartFailure {
    pub operation: CartOperation,
    pub error: CartError,
}

impl CartFailure {
    pub fn new(operation: CartOperation, error: CartError) -> Self {
        Self { operation, error }
    }
}

impl IntoErrorResponse for CartFailure {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let generic = self.operation.failure_message();
        let (status, name, message) = match &self.error {
            CartError::StockExceeded => {
                (StatusCode::CONFLICT, "StockExceeded", STOCK_EXCEEDED_MESSAGE)
            }
            CartError::ProductNotFound => (StatusCode::NOT_FOUND, "NotFound", generic),
            CartError::Service(_) => (StatusCode::BAD_GATEWAY, "TransportFailure", generic),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TransportFailure",
                generic,
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                code: self.error.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::{RepositoryError, ServiceError};

    fn respond(operation: CartOperation, error: CartError) -> (StatusCode, ErrorResponse) {
        let (status, json) = CartFailure::new(operation, error).into_error_response();
        (status, json.0)
    }

    #[test]
    fn should_use_stock_message_for_every_operation() {
        for operation in [
            CartOperation::Add,
            CartOperation::Remove,
            CartOperation::ChangeAmount,
        ] {
            let (status, body) = respond(operation, CartError::StockExceeded);
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(body.message, STOCK_EXCEEDED_MESSAGE);
            assert_eq!(body.code, "cart.stock_exceeded");
        }
    }

    #[test]
    fn should_use_operation_message_when_product_missing() {
        let (status, body) = respond(CartOperation::Remove, CartError::ProductNotFound);

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, REMOVE_FAILED_MESSAGE);
    }

    #[test]
    fn should_collapse_transport_failures_into_operation_message() {
        let (status, body) = respond(
            CartOperation::Add,
            CartError::Service(ServiceError::Unavailable),
        );
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.name, "TransportFailure");
        assert_eq!(body.message, ADD_FAILED_MESSAGE);

        let (status, body) = respond(
            CartOperation::ChangeAmount,
            CartError::Repository(RepositoryError::Persistence),
        );
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, CHANGE_AMOUNT_FAILED_MESSAGE);
    }
}
