use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::body::{Body, RETRIEVE_FAX};
use super::decode::Decoded;
use super::response::{ResponseError, decode_response};
use crate::domain::{FaxFormat, RetrieveFax, RetrievedFax, ViewedMark};

pub fn encode_retrieve_fax_body(request: &RetrieveFax) -> Body {
    let mut body = Body::new(RETRIEVE_FAX);
    body.put_identifier(&request.fax);
    body.put_direction(request.direction);
    body.put_opt("sSubUserID", request.options.sub_user_id);
    body.put_opt(FaxFormat::FIELD, request.options.format.map(FaxFormat::as_str));
    body.put_opt(ViewedMark::FIELD, request.options.mark_as.map(ViewedMark::as_str));
    body
}

/// `Result` holds the document as base64 text.
pub fn decode_retrieve_fax_response(json: &str) -> Result<Decoded<RetrievedFax>, ResponseError> {
    let decoded = decode_response::<String>(json)?;
    let compact = decoded
        .value
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>();
    let content = STANDARD.decode(compact)?;
    Ok(Decoded {
        value: RetrievedFax { content },
        unused_keys: decoded.unused_keys,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{Direction, FaxDetailsId, FaxIdentifier, RetrieveFaxOptions};

    #[test]
    fn encode_retrieve_fax_body_params() {
        let request = RetrieveFax {
            fax: FaxIdentifier::DetailsId(FaxDetailsId::new(31524120).unwrap()),
            direction: Direction::Outbound,
            options: RetrieveFaxOptions {
                format: Some(FaxFormat::Tiff),
                mark_as: Some(ViewedMark::Read),
                ..Default::default()
            },
        };
        assert_eq!(
            encode_retrieve_fax_body(&request).into_value(),
            json!({
                "action": "Retrieve_Fax",
                "sFaxDetailsID": 31524120,
                "sDirection": "OUT",
                "sFaxFormat": "TIF",
                "sMarkasViewed": "Y"
            })
        );
    }

    #[test]
    fn decode_retrieve_fax_returns_raw_bytes() {
        let json = r#"{"Status": "Success", "Result": "JVBERi0x\nLjQK"}"#;
        let decoded = decode_retrieve_fax_response(json).unwrap();
        assert_eq!(decoded.value.content, b"%PDF-1.4\n");
    }

    #[test]
    fn decode_retrieve_fax_rejects_bad_base64() {
        let json = r#"{"Status": "Success", "Result": "not base64!"}"#;
        let err = decode_retrieve_fax_response(json).unwrap_err();
        assert!(matches!(err, ResponseError::Content(_)));
    }
}
