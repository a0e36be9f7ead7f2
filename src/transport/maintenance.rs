use super::body::{Body, DELETE_FAX, STOP_FAX, UPDATE_VIEWED_STATUS};
use super::decode::Decoded;
use super::response::{ResponseError, decode_response};
use crate::domain::{
    Acknowledgement, DeleteFax, FaxDetailsId, FaxFileName, FaxIdentifier, UpdateViewedStatus,
    ViewedMark,
};

pub fn encode_stop_fax_body(id: FaxDetailsId) -> Body {
    let mut body = Body::new(STOP_FAX);
    body.put(FaxDetailsId::FIELD, id.value());
    body
}

/// Each fax gets its own indexed key: `sFaxDetailsID_0`, `sFaxFileName_1`, ...
pub fn encode_delete_fax_body(request: &DeleteFax) -> Body {
    let mut body = Body::new(DELETE_FAX);
    body.put_direction(request.direction());
    for (idx, fax) in request.faxes().iter().enumerate() {
        match fax {
            FaxIdentifier::DetailsId(id) => {
                body.put(format!("{}_{idx}", FaxDetailsId::FIELD), id.value());
            }
            FaxIdentifier::FileName(name) => {
                body.put(format!("{}_{idx}", FaxFileName::FIELD), name.as_str());
            }
        }
    }
    body
}

pub fn encode_update_viewed_status_body(request: &UpdateViewedStatus) -> Body {
    let mut body = Body::new(UPDATE_VIEWED_STATUS);
    body.put_identifier(&request.fax);
    body.put_direction(request.direction);
    body.put(ViewedMark::FIELD, request.mark_as.as_str());
    body
}

pub fn decode_acknowledgement_response(
    json: &str,
) -> Result<Decoded<Acknowledgement>, ResponseError> {
    let decoded = decode_response::<String>(json)?;
    Ok(Decoded {
        value: Acknowledgement {
            message: decoded.value,
        },
        unused_keys: decoded.unused_keys,
    })
}
