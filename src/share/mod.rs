//! Share-state codec: the active category and option snapshot ⇄ a compact
//! URL-safe token carried in the `s` query parameter of a share link.
//!
//! Decoding is tolerant by contract: malformed tokens come back as a
//! recoverable [`ShareDecodeError`], and the caller falls back to default
//! state instead of applying anything partial.

use crate::options::{OptionRecord, PromptCategory};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter holding the encoded token.
pub const SHARE_PARAM: &str = "s";

/// Transient snapshot for one encode or decode call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShareState {
    pub category: PromptCategory,
    pub options: OptionRecord,
}

impl ShareState {
    pub fn new(options: OptionRecord) -> Self {
        Self {
            category: options.category(),
            options,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShareDecodeError {
    #[error("share token is not valid base64")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("share token payload is not valid JSON")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("share token category does not match its option snapshot")]
    CategoryMismatch,

    #[error("share link is not a valid URL")]
    InvalidLink(#[from] url::ParseError),
}

/// Serialize a snapshot into a URL-safe unpadded base64 token.
pub fn encode(state: &ShareState) -> String {
    // plain strings and enum tags only; this serialization cannot fail
    let json = serde_json::to_vec(state).expect("share state serializes to JSON");
    URL_SAFE_NO_PAD.encode(json)
}

/// Inverse of [`encode`]. The token's recorded category must agree with the
/// option snapshot's own tag; disagreeing tokens are rejected rather than
/// trusted either way.
pub fn decode(token: &str) -> Result<ShareState, ShareDecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    let state: ShareState = serde_json::from_slice(&bytes)?;

    if state.options.category() != state.category {
        return Err(ShareDecodeError::CategoryMismatch);
    }

    Ok(state)
}

/// Append the encoded token to `base_url` as the `s` query parameter.
pub fn share_link(base_url: &str, state: &ShareState) -> Result<String, ShareDecodeError> {
    let mut link = Url::parse(base_url)?;
    link.query_pairs_mut().append_pair(SHARE_PARAM, &encode(state));
    Ok(link.into())
}

/// Extract and decode the `s` parameter from a share link.
/// `Ok(None)` when the parameter is absent — the caller keeps its defaults.
pub fn from_link(link: &str) -> Result<Option<ShareState>, ShareDecodeError> {
    let link = Url::parse(link)?;
    match link.query_pairs().find(|(key, _)| key == SHARE_PARAM) {
        Some((_, token)) => decode(&token).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state(category: PromptCategory) -> ShareState {
        let mut options = OptionRecord::empty(category);
        for name in options.field_names().to_vec() {
            options.set_field(name, format!("shared {name}")).unwrap();
        }
        ShareState::new(options)
    }

    #[test]
    fn round_trip_preserves_every_category() {
        for category in PromptCategory::ALL {
            let state = filled_state(category);
            let token = encode(&state);
            assert_eq!(decode(&token).unwrap(), state);
        }
    }

    #[test]
    fn tokens_are_url_safe() {
        let token = encode(&filled_state(PromptCategory::Video));
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn garbage_tokens_are_rejected_not_panicked_on() {
        assert!(matches!(
            decode("not!!valid!!base64"),
            Err(ShareDecodeError::InvalidEncoding(_))
        ));

        let valid_b64_bad_json = URL_SAFE_NO_PAD.encode(b"{ truncated");
        assert!(matches!(
            decode(&valid_b64_bad_json),
            Err(ShareDecodeError::InvalidPayload(_))
        ));
    }

    #[test]
    fn truncated_tokens_are_rejected() {
        let token = encode(&filled_state(PromptCategory::Code));
        let truncated = &token[..token.len() / 2];
        assert!(decode(truncated).is_err());
    }

    #[test]
    fn disagreeing_category_and_snapshot_are_rejected() {
        let mut json = serde_json::to_value(&filled_state(PromptCategory::Image)).unwrap();
        json["category"] = serde_json::Value::String("text".into());
        let token = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&json).unwrap());

        assert!(matches!(
            decode(&token),
            Err(ShareDecodeError::CategoryMismatch)
        ));
    }

    #[test]
    fn share_links_round_trip() {
        let state = filled_state(PromptCategory::Audio);
        let link = share_link("https://promptcraft.app/", &state).unwrap();

        let restored = from_link(&link).unwrap();
        assert_eq!(restored, Some(state));
    }

    #[test]
    fn links_without_the_parameter_keep_defaults() {
        assert_eq!(from_link("https://promptcraft.app/").unwrap(), None);
        assert_eq!(
            from_link("https://promptcraft.app/?other=1").unwrap(),
            None
        );
    }

    #[test]
    fn invalid_links_are_a_decode_error() {
        assert!(matches!(
            from_link("definitely not a url"),
            Err(ShareDecodeError::InvalidLink(_))
        ));
    }
}
