//! Transport layer: wire-format details, envelope classification and decoding.

mod body;
mod decode;
mod envelope;
mod fax_status;
mod inbox;
mod maintenance;
mod outbox;
mod queue_fax;
mod response;
mod retrieve_fax;
mod usage;

pub use body::Body;
pub use decode::{
    DecodeError, DecodeRecord, Decoded, DecodedRecord, FieldKind, FieldSpec, FieldValue,
    FromResult, decode_result,
};
pub use envelope::{EnvelopeError, MalformedEnvelope, RawEnvelope, ResultError, classify};
pub use fax_status::{
    decode_fax_status_response, decode_multi_fax_status_response, encode_fax_status_body,
    encode_multi_fax_status_body,
};
pub use inbox::{decode_inbox_response, encode_inbox_body};
pub use maintenance::{
    decode_acknowledgement_response, encode_delete_fax_body, encode_stop_fax_body,
    encode_update_viewed_status_body,
};
pub use outbox::{decode_outbox_response, encode_outbox_body};
pub use queue_fax::{decode_queued_fax_response, encode_forward_fax_body, encode_queue_fax_body};
pub use response::{ResponseError, decode_response};
pub use retrieve_fax::{decode_retrieve_fax_response, encode_retrieve_fax_body};
pub use usage::{decode_usage_response, encode_usage_body};
