use super::body::{Body, GET_FAX_INBOX};
use super::decode::{DecodeRecord, Decoded, DecodedRecord, FieldSpec};
use super::response::{ResponseError, decode_response};
use crate::domain::{Inbox, InboxEntry, InboxOptions, ViewedFilter};

impl DecodeRecord for InboxEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::string("file_name", "FileName"),
        FieldSpec::string("receive_status", "ReceiveStatus"),
        FieldSpec::string("date", "Date"),
        FieldSpec::string("caller_id", "CallerID"),
        FieldSpec::string("remote_id", "RemoteID"),
        FieldSpec::string("viewed_status", "ViewedStatus"),
        FieldSpec::string("user_id", "User_ID"),
        FieldSpec::string("user_fax_number", "User_FaxNumber"),
        FieldSpec::integer("epoch_time", "EpochTime"),
        FieldSpec::integer("pages", "Pages"),
        FieldSpec::integer("size", "Size"),
    ];

    fn from_record(mut record: DecodedRecord) -> Self {
        Self {
            file_name: record.string("file_name"),
            receive_status: record.string("receive_status"),
            date: record.string("date"),
            caller_id: record.string("caller_id"),
            remote_id: record.string("remote_id"),
            viewed_status: record.string("viewed_status"),
            user_id: record.optional_string("user_id"),
            user_fax_number: record.optional_string("user_fax_number"),
            epoch_time: record.integer("epoch_time"),
            pages: record.integer("pages"),
            size: record.integer("size"),
        }
    }
}

pub fn encode_inbox_body(options: &InboxOptions) -> Body {
    let mut body = Body::new(GET_FAX_INBOX);
    body.put_period(options.period.as_ref());
    body.put_opt(ViewedFilter::FIELD, options.viewed.map(ViewedFilter::as_str));
    body.put_include_sub_users(options.include_sub_users);
    body
}

pub fn decode_inbox_response(json: &str) -> Result<Decoded<Inbox>, ResponseError> {
    let decoded = decode_response::<Vec<InboxEntry>>(json)?;
    Ok(Decoded {
        value: Inbox {
            entries: decoded.value,
        },
        unused_keys: decoded.unused_keys,
    })
}
