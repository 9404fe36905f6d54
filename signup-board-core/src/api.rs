//! Backend response contract.
//!
//! The backend speaks a small JSON protocol: the read endpoint returns the
//! activity catalog as one object, and both mutation endpoints answer with
//! `{"message": ...}` on success or `{"detail": ...}` on failure. The
//! functions here fold raw response bodies into that contract so the view
//! layer never touches JSON directly.

use serde_json::Value;

use crate::domain::ActivityCatalog;

/// Text shown when the server rejects a mutation without a `detail` field
pub const DEFAULT_REJECTION: &str = "An error occurred";

/// Errors surfaced by backend calls.
///
/// `Transport` and `InvalidBody` are client-generated and render as an
/// operation-specific generic message; `Rejected` carries the server's own
/// error text and renders verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("response body was not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("{}", detail.as_deref().unwrap_or(DEFAULT_REJECTION))]
    Rejected { detail: Option<String> },
}

/// Interpret the body of a signup/unregister response.
///
/// `ok` is whether the HTTP status was 2xx. The body is parsed first, so a
/// non-JSON body is an [`ApiError::InvalidBody`] regardless of status.
pub fn mutation_reply(ok: bool, body: &str) -> Result<String, ApiError> {
    let value: Value = serde_json::from_str(body)?;

    if ok {
        Ok(value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    } else {
        let detail = value
            .get("detail")
            .and_then(Value::as_str)
            .map(str::to_string);
        tracing::debug!("server rejected mutation: {:?}", detail);
        Err(ApiError::Rejected { detail })
    }
}

/// Interpret the body of an activity catalog response
pub fn catalog_reply(body: &str) -> Result<ActivityCatalog, ApiError> {
    let catalog: ActivityCatalog = serde_json::from_str(body)?;
    tracing::debug!("parsed snapshot with {} activities", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("signup_board_core=debug")
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_success_reply_surfaces_server_message() {
        let reply = mutation_reply(true, r#"{"message": "Signed up anna@example.edu for Chess Club"}"#);

        assert_eq!(
            reply.unwrap(),
            "Signed up anna@example.edu for Chess Club"
        );
    }

    #[test]
    fn test_success_reply_without_message_is_empty() {
        let reply = mutation_reply(true, "{}");
        assert_eq!(reply.unwrap(), "");
    }

    #[test]
    fn test_failure_reply_carries_detail() {
        init_test_logging();

        let reply = mutation_reply(false, r#"{"detail": "Activity not found"}"#);

        match reply {
            Err(ApiError::Rejected { detail }) => {
                assert_eq!(detail.as_deref(), Some("Activity not found"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_reply_without_detail() {
        let reply = mutation_reply(false, "{}");

        match reply {
            Err(err @ ApiError::Rejected { detail: None }) => {
                assert_eq!(err.to_string(), DEFAULT_REJECTION);
            }
            other => panic!("expected bare rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_rejection_display_uses_detail() {
        let err = ApiError::Rejected {
            detail: Some("Already signed up for this activity".to_string()),
        };
        assert_eq!(err.to_string(), "Already signed up for this activity");
    }

    #[test]
    fn test_non_json_body_is_invalid_regardless_of_status() {
        assert!(matches!(
            mutation_reply(true, "<html>gateway timeout</html>"),
            Err(ApiError::InvalidBody(_))
        ));
        assert!(matches!(
            mutation_reply(false, ""),
            Err(ApiError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_catalog_reply_parses_snapshot() {
        let catalog = catalog_reply(
            r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 12, "participants": []}}"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.names().next(), Some("Chess Club"));
    }

    #[test]
    fn test_catalog_reply_rejects_non_json() {
        assert!(matches!(
            catalog_reply("<!DOCTYPE html>"),
            Err(ApiError::InvalidBody(_))
        ));
    }
}
