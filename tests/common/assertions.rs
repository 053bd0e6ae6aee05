//! Shared assertions for integration tests.

use reqwest::StatusCode;

use super::client::{ApiError, ApiResult, ApiSuccess};

/// Unwraps a successful response, failing the test with the error otherwise.
pub fn assert_success<T>(result: ApiResult<T>) -> ApiSuccess<T> {
    match result {
        Ok(success) => success,
        Err(ApiError::Http(error)) => panic!("Expected success, got HTTP error: {error}"),
        Err(ApiError::Api { status, code }) => {
            panic!("Expected success, got API error: {status} {code}")
        }
    }
}

/// Asserts that the result is an API error with the given status and code.
pub fn assert_api_error<T: std::fmt::Debug>(
    result: ApiResult<T>,
    expected_status: StatusCode,
    expected_code: &str,
) {
    match result {
        Ok(success) => panic!(
            "Expected {expected_status} {expected_code}, got success ({})",
            success.status
        ),
        Err(ApiError::Http(error)) => panic!("Expected API error, got HTTP error: {error}"),
        Err(ApiError::Api { status, code }) => {
            assert_eq!(status, expected_status, "unexpected status (code: {code})");
            assert_eq!(code, expected_code);
        }
    }
}

/// Asserts an error status only, for responses whose body is not the
/// application error shape (axum's 422 rejection).
pub fn assert_error_status<T: std::fmt::Debug>(result: ApiResult<T>, expected_status: StatusCode) {
    match result {
        Ok(success) => panic!("Expected {expected_status}, got success ({})", success.status),
        Err(ApiError::Http(error)) => panic!("Expected API error, got HTTP error: {error}"),
        Err(ApiError::Api { status, .. }) => assert_eq!(status, expected_status),
    }
}
