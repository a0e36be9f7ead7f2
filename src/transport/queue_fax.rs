use serde_json::Value;

use super::body::{Body, FORWARD_FAX, QUEUE_FAX};
use super::decode::{DecodeError, Decoded};
use super::response::{ResponseError, decode_response};
use crate::domain::{CoverPage, FaxDetailsId, FaxFile, ForwardFax, QueueFax, QueuedFax};

pub fn encode_queue_fax_body(request: &QueueFax) -> Body {
    let mut body = Body::new(QUEUE_FAX);
    body.put_recipients(request.recipients());

    let options = request.options();
    body.put_delivery(
        options.retries,
        options.account_code.as_deref(),
        options.fax_from_header.as_deref(),
        options.notify_url.as_ref(),
        options.queue_date.as_ref(),
        options.queue_time.as_ref(),
    );
    body.put_opt(CoverPage::FIELD, options.cover_page.map(CoverPage::as_str));
    let text = &options.cover_page_text;
    body.put_text("sCPFromName", text.from_name.as_deref());
    body.put_text("sCPToName", text.to_name.as_deref());
    body.put_text("sCPOrganization", text.organization.as_deref());
    body.put_text("sCPSubject", text.subject.as_deref());
    body.put_text("sCPComments", text.comments.as_deref());

    for (idx, file) in request.files().iter().enumerate() {
        body.put(format!("{}{idx}", FaxFile::NAME_PREFIX), file.name());
        body.put(format!("{}{idx}", FaxFile::CONTENT_PREFIX), file.content());
    }

    body
}

pub fn encode_forward_fax_body(request: &ForwardFax) -> Body {
    let mut body = Body::new(FORWARD_FAX);
    body.put_identifier(&request.fax);
    body.put_direction(request.direction);
    body.put_recipients(&request.recipients);

    let options = &request.options;
    body.put_opt("sSubUserID", options.sub_user_id);
    body.put_delivery(
        options.retries,
        options.account_code.as_deref(),
        options.fax_from_header.as_deref(),
        options.notify_url.as_ref(),
        options.queue_date.as_ref(),
        options.queue_time.as_ref(),
    );
    body
}

/// `Result` of a queue/forward call is the new fax id, sent as a string or a number.
pub fn decode_queued_fax_response(json: &str) -> Result<Decoded<QueuedFax>, ResponseError> {
    let decoded = decode_response::<String>(json)?;
    let details_id = FaxDetailsId::parse(&decoded.value).map_err(|_| DecodeError {
        field: "Result".to_owned(),
        expected: "fax id",
        actual: Value::String(decoded.value.clone()),
    })?;
    Ok(Decoded {
        value: QueuedFax { details_id },
        unused_keys: decoded.unused_keys,
    })
}
