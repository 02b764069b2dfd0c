//! User-facing copy for request failures

use crate::api::ApiError;

pub const FETCH_FAILED: &str = "Unable to fetch links at the moment, please try again";
pub const INSUFFICIENT_CREDITS: &str = "You do not have enough credits to perform this action. Add funds to your account using Manage Payment option";
pub const GENERIC_FAILURE: &str = "Something went wrong, please try again";

/// Banner text for a failed `GET /links`
pub fn fetch_error(err: &ApiError) -> String {
    err.server_message().unwrap_or(FETCH_FAILED).to_string()
}

/// Banner text for a failed create or update
pub fn submit_error(err: &ApiError) -> &'static str {
    if err.is_insufficient_funds() {
        INSUFFICIENT_CREDITS
    } else {
        GENERIC_FAILURE
    }
}

/// Banner text for a failed delete
pub fn delete_error(_err: &ApiError) -> &'static str {
    GENERIC_FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorBody;

    fn status(code: u16, body: &str) -> ApiError {
        ApiError::Status {
            status: code,
            body: ErrorBody::parse(body),
        }
    }

    #[test]
    fn test_fetch_error_prefers_server_text() {
        assert_eq!(
            fetch_error(&status(401, r#"{"error":"Unauthorized access"}"#)),
            "Unauthorized access"
        );
        assert_eq!(fetch_error(&status(500, "oops")), FETCH_FAILED);
        assert_eq!(fetch_error(&ApiError::Transport("refused".into())), FETCH_FAILED);
    }

    #[test]
    fn test_submit_error() {
        assert_eq!(
            submit_error(&status(402, r#"{"code":"INSUFFICIENT_FUNDS"}"#)),
            INSUFFICIENT_CREDITS
        );
        assert_eq!(
            submit_error(&status(400, r#"{"error":"Bad input"}"#)),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn test_delete_error_is_generic() {
        assert_eq!(
            delete_error(&status(402, r#"{"code":"INSUFFICIENT_FUNDS"}"#)),
            GENERIC_FAILURE
        );
    }
}
