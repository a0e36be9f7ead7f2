use super::decode::{DecodeError, Decoded, FromResult, decode_result};
use super::envelope::{EnvelopeError, MalformedEnvelope, RawEnvelope, ResultError, classify};

/// Everything that can go wrong between a response body and a typed result.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Malformed(#[from] MalformedEnvelope),

    #[error("SRFax reported failure: {0}")]
    Failed(#[from] ResultError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("fax content is not valid base64: {0}")]
    Content(#[from] base64::DecodeError),
}

impl From<EnvelopeError> for ResponseError {
    fn from(value: EnvelopeError) -> Self {
        match value {
            EnvelopeError::Malformed(err) => Self::Malformed(err),
            EnvelopeError::Failed(err) => Self::Failed(err),
        }
    }
}

/// Parse, classify and decode one response body.
///
/// The decoder only runs once the envelope is classified as successful.
pub fn decode_response<T: FromResult>(body: &str) -> Result<Decoded<T>, ResponseError> {
    let envelope = RawEnvelope::parse(body)?;
    if let Err(err) = classify(&envelope) {
        tracing::debug!(error = %err, "SRFax response classified as failure");
        return Err(err.into());
    }
    Ok(decode_result(&envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_short_circuits_before_decoding() {
        // `Result` is a string, which a list decode would reject; the classifier must win.
        let err = decode_response::<Vec<crate::domain::InboxEntry>>(
            r#"{"Status": "Failed", "Result": "Invalid Fax Type / "}"#,
        )
        .unwrap_err();
        match err {
            ResponseError::Failed(ResultError { status, raw }) => {
                assert_eq!(status, "Failed");
                assert_eq!(raw, "Invalid Fax Type / ");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_malformed() {
        let err = decode_response::<String>("{}").unwrap_err();
        match err {
            ResponseError::Malformed(MalformedEnvelope(message)) => {
                assert_eq!(message, "missing Status key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_a_json_error() {
        let err = decode_response::<String>("<xml/>").unwrap_err();
        assert!(matches!(err, ResponseError::Json(_)));
    }

    #[test]
    fn success_is_decoded() {
        let decoded = decode_response::<String>(r#"{"Status": "Success", "Result": 42}"#).unwrap();
        assert_eq!(decoded.value, "42");
    }
}
