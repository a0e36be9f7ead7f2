use super::body::{Body, GET_FAX_STATUS, GET_MULTI_FAX_STATUS};
use super::decode::{
    DecodeRecord, Decoded, DecodedRecord, FieldKind, FieldSpec, FieldValue, FromResult,
};
use super::response::{ResponseError, decode_response};
use crate::domain::{FaxDetailsId, FaxStatus, MultiFaxStatus};

// `EpochTime`, `Pages`, `Duration` and `Size` arrive as numbers from the single
// status call and as (possibly empty) strings from the multi status call.
const FAX_STATUS_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("file_name", "FileName"),
    FieldSpec::string("sent_status", "SentStatus"),
    FieldSpec::string("date_queued", "DateQueued"),
    FieldSpec::string("date_sent", "DateSent"),
    FieldSpec::string("to_fax_number", "ToFaxNumber"),
    FieldSpec::string("remote_id", "RemoteID"),
    FieldSpec::string("error_code", "ErrorCode"),
    FieldSpec::string("account_code", "AccountCode"),
    FieldSpec::string("subject", "Subject"),
    FieldSpec::integer("pages", "Pages"),
    FieldSpec::integer("epoch_time", "EpochTime"),
    FieldSpec::integer("duration", "Duration"),
    FieldSpec::integer("size", "Size"),
];

impl DecodeRecord for FaxStatus {
    const FIELDS: &'static [FieldSpec] = FAX_STATUS_FIELDS;

    fn from_record(mut record: DecodedRecord) -> Self {
        Self {
            file_name: record.string("file_name"),
            sent_status: record.string("sent_status"),
            date_queued: record.string("date_queued"),
            date_sent: record.string("date_sent"),
            to_fax_number: record.string("to_fax_number"),
            remote_id: record.string("remote_id"),
            error_code: record.string("error_code"),
            account_code: record.string("account_code"),
            subject: record.string("subject"),
            pages: record.integer("pages"),
            epoch_time: record.integer("epoch_time"),
            duration: record.integer("duration"),
            size: record.integer("size"),
        }
    }
}

impl FromResult for FaxStatus {
    const KIND: FieldKind = FieldKind::Record(FAX_STATUS_FIELDS);

    fn from_value(value: Option<FieldValue>) -> Self {
        match value {
            Some(FieldValue::Record(record)) => Self::from_record(record),
            _ => Self::default(),
        }
    }
}

pub fn encode_fax_status_body(id: FaxDetailsId) -> Body {
    let mut body = Body::new(GET_FAX_STATUS);
    body.put(FaxDetailsId::FIELD, id.value());
    body
}

pub fn encode_multi_fax_status_body(request: &MultiFaxStatus) -> Body {
    let mut body = Body::new(GET_MULTI_FAX_STATUS);
    let ids = request
        .ids()
        .iter()
        .map(FaxDetailsId::to_string)
        .collect::<Vec<_>>()
        .join("|");
    body.put(FaxDetailsId::FIELD, ids);
    body
}

pub fn decode_fax_status_response(json: &str) -> Result<Decoded<FaxStatus>, ResponseError> {
    decode_response(json)
}

pub fn decode_multi_fax_status_response(
    json: &str,
) -> Result<Decoded<Vec<FaxStatus>>, ResponseError> {
    decode_response(json)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_fax_status_body_params() {
        let body = encode_fax_status_body(FaxDetailsId::new(30294755).unwrap());
        assert_eq!(
            body.into_value(),
            json!({"action": "Get_FaxStatus", "sFaxDetailsID": 30294755})
        );
    }

    #[test]
    fn encode_multi_fax_status_body_joins_ids_with_pipes() {
        let request = MultiFaxStatus::new(vec![
            FaxDetailsId::new(1).unwrap(),
            FaxDetailsId::new(22).unwrap(),
        ])
        .unwrap();
        assert_eq!(
            encode_multi_fax_status_body(&request).into_value(),
            json!({"action": "Get_MultiFaxStatus", "sFaxDetailsID": "1|22"})
        );
    }

    #[test]
    fn decode_single_status_with_numeric_epoch_time() {
        let json = r#"
        {
          "Status": "Success",
          "Result": {
            "FileName": "20180101230101-8812-34_0|30294755",
            "SentStatus": "Sent",
            "DateQueued": "Jan 01/18 11:01 PM",
            "DateSent": "Jan 01/18 11:02 PM",
            "ToFaxNumber": "14161112222",
            "RemoteID": "SRFax",
            "ErrorCode": "",
            "AccountCode": "",
            "Pages": 1,
            "EpochTime": 1514847720,
            "Duration": 25,
            "Size": 19348
          }
        }
        "#;
        let decoded = decode_fax_status_response(json).unwrap();
        let status = decoded.value;
        assert_eq!(status.file_name, "20180101230101-8812-34_0|30294755");
        assert_eq!(status.sent_status, "Sent");
        assert_eq!(status.epoch_time, 1514847720);
        assert_eq!(status.size, 19348);
        assert!(decoded.unused_keys.is_empty());
    }

    #[test]
    fn decode_multi_status_tolerates_empty_numeric_strings() {
        let json = r#"
        {
          "Status": "Success",
          "Result": [
            {"FileName": "a|1", "SentStatus": "Sent", "Pages": "2", "EpochTime": "1514847720", "Duration": "25", "Size": "100"},
            {"FileName": "b|2", "SentStatus": "Failed", "Pages": "", "EpochTime": "", "Duration": "", "Size": "", "ErrorCode": "No Answer"}
          ]
        }
        "#;
        let decoded = decode_multi_fax_status_response(json).unwrap();
        assert_eq!(decoded.value.len(), 2);
        assert_eq!(decoded.value[0].pages, 2);
        assert_eq!(decoded.value[0].epoch_time, 1514847720);
        assert_eq!(decoded.value[1].pages, 0);
        assert_eq!(decoded.value[1].error_code, "No Answer");
    }

    #[test]
    fn decode_status_failure_is_result_error() {
        let json = r#"{"Status": "Failed", "Result": "Invalid sFaxDetailsID / "}"#;
        let err = decode_fax_status_response(json).unwrap_err();
        assert!(matches!(err, ResponseError::Failed(_)));
    }
}
