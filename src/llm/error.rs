//! Failure taxonomy for the generation API.
//!
//! Every error carries its fixed user-facing message as the `Display` text;
//! the command layer forwards it verbatim.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Invalid or missing API key. Check your credentials and try again.")]
    InvalidCredential,

    #[error("The request was blocked by the provider's content policy. Adjust the options and try again.")]
    SafetyRejection,

    #[error("Usage quota exceeded. Wait a moment before requesting again.")]
    QuotaExceeded,

    #[error("The provider reported a billing problem with this account.")]
    BillingRequired,

    #[error("The service is temporarily overloaded. Try again in a few seconds.")]
    ResourceExhausted,

    #[error("The request failed unexpectedly. Please try again.")]
    Unknown,
}

/// Map an HTTP failure to the fixed taxonomy.
///
/// Body markers are checked before the status code: providers report policy
/// blocks and billing problems inside the error payload rather than through
/// a dedicated status.
pub fn classify_http_failure(status: u16, body: &str) -> GenerationError {
    let body = body.to_ascii_lowercase();

    if body.contains("safety") || body.contains("content_filter") || body.contains("blocked") {
        return GenerationError::SafetyRejection;
    }
    if body.contains("billing") || body.contains("payment required") {
        return GenerationError::BillingRequired;
    }

    match status {
        401 | 403 => GenerationError::InvalidCredential,
        402 => GenerationError::BillingRequired,
        429 => {
            if body.contains("overloaded") {
                GenerationError::ResourceExhausted
            } else {
                GenerationError::QuotaExceeded
            }
        }
        500..=599 => GenerationError::ResourceExhausted,
        _ => GenerationError::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_the_taxonomy() {
        assert_eq!(classify_http_failure(401, ""), GenerationError::InvalidCredential);
        assert_eq!(classify_http_failure(403, ""), GenerationError::InvalidCredential);
        assert_eq!(classify_http_failure(402, ""), GenerationError::BillingRequired);
        assert_eq!(classify_http_failure(500, ""), GenerationError::ResourceExhausted);
        assert_eq!(classify_http_failure(503, ""), GenerationError::ResourceExhausted);
        assert_eq!(classify_http_failure(418, ""), GenerationError::Unknown);
    }

    #[test]
    fn rate_limits_split_on_the_overload_marker() {
        assert_eq!(
            classify_http_failure(429, r#"{"error":{"message":"You exceeded your current quota"}}"#),
            GenerationError::QuotaExceeded
        );
        assert_eq!(
            classify_http_failure(429, r#"{"error":{"message":"Rate limit reached"}}"#),
            GenerationError::QuotaExceeded
        );
        assert_eq!(
            classify_http_failure(429, r#"{"error":{"message":"The engine is currently overloaded"}}"#),
            GenerationError::ResourceExhausted
        );
    }

    #[test]
    fn body_markers_win_over_the_status_code() {
        assert_eq!(
            classify_http_failure(400, r#"{"error":{"code":"content_filter"}}"#),
            GenerationError::SafetyRejection
        );
        assert_eq!(
            classify_http_failure(400, r#"{"error":{"message":"Request blocked by safety system"}}"#),
            GenerationError::SafetyRejection
        );
        assert_eq!(
            classify_http_failure(403, r#"{"error":{"message":"billing hard limit reached"}}"#),
            GenerationError::BillingRequired
        );
    }

    #[test]
    fn every_variant_has_a_distinct_user_facing_message() {
        let messages = [
            GenerationError::InvalidCredential.to_string(),
            GenerationError::SafetyRejection.to_string(),
            GenerationError::QuotaExceeded.to_string(),
            GenerationError::BillingRequired.to_string(),
            GenerationError::ResourceExhausted.to_string(),
            GenerationError::Unknown.to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
