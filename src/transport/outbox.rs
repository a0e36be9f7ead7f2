use super::body::{Body, GET_FAX_OUTBOX};
use super::decode::{DecodeRecord, Decoded, DecodedRecord, FieldSpec};
use super::response::{ResponseError, decode_response};
use crate::domain::{Outbox, OutboxEntry, OutboxOptions};

impl DecodeRecord for OutboxEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::string("file_name", "FileName"),
        FieldSpec::string("sent_status", "SentStatus"),
        FieldSpec::string("date_queued", "DateQueued"),
        FieldSpec::string("date_sent", "DateSent"),
        FieldSpec::integer("epoch_time", "EpochTime"),
        FieldSpec::string("to_fax_number", "ToFaxNumber"),
        FieldSpec::string("remote_id", "RemoteID"),
        FieldSpec::string("error_code", "ErrorCode"),
        FieldSpec::string("account_code", "AccountCode"),
        FieldSpec::string("subject", "Subject"),
        FieldSpec::string("user_id", "User_ID"),
        FieldSpec::string("user_fax_number", "User_FaxNumber"),
        FieldSpec::integer("pages", "Pages"),
        FieldSpec::integer("duration", "Duration"),
        FieldSpec::integer("size", "Size"),
    ];

    fn from_record(mut record: DecodedRecord) -> Self {
        Self {
            file_name: record.string("file_name"),
            sent_status: record.string("sent_status"),
            date_queued: record.string("date_queued"),
            date_sent: record.string("date_sent"),
            epoch_time: record.integer("epoch_time"),
            to_fax_number: record.string("to_fax_number"),
            remote_id: record.string("remote_id"),
            error_code: record.string("error_code"),
            account_code: record.string("account_code"),
            subject: record.string("subject"),
            user_id: record.optional_string("user_id"),
            user_fax_number: record.optional_string("user_fax_number"),
            pages: record.integer("pages"),
            duration: record.integer("duration"),
            size: record.integer("size"),
        }
    }
}

pub fn encode_outbox_body(options: &OutboxOptions) -> Body {
    let mut body = Body::new(GET_FAX_OUTBOX);
    body.put_period(options.period.as_ref());
    body.put_include_sub_users(options.include_sub_users);
    body
}

pub fn decode_outbox_response(json: &str) -> Result<Decoded<Outbox>, ResponseError> {
    let decoded = decode_response::<Vec<OutboxEntry>>(json)?;
    Ok(Decoded {
        value: Outbox {
            entries: decoded.value,
        },
        unused_keys: decoded.unused_keys,
    })
}
