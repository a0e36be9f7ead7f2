use super::body::{Body, GET_FAX_USAGE};
use super::decode::{DecodeRecord, Decoded, DecodedRecord, FieldSpec};
use super::response::{ResponseError, decode_response};
use crate::domain::{UsageEntry, UsageOptions};

impl DecodeRecord for UsageEntry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::string("period", "Period"),
        FieldSpec::string("client_name", "ClientName"),
        FieldSpec::string("billing_number", "BillingNumber"),
        FieldSpec::integer("user_id", "UserID"),
        FieldSpec::integer("sub_user_id", "SubUserID"),
        FieldSpec::integer("number_of_faxes", "NumberOfFaxes"),
        FieldSpec::integer("number_of_pages", "NumberOfPages"),
    ];

    fn from_record(mut record: DecodedRecord) -> Self {
        Self {
            period: record.string("period"),
            client_name: record.string("client_name"),
            billing_number: record.string("billing_number"),
            user_id: record.integer("user_id"),
            sub_user_id: record.integer("sub_user_id"),
            number_of_faxes: record.integer("number_of_faxes"),
            number_of_pages: record.integer("number_of_pages"),
        }
    }
}

pub fn encode_usage_body(options: &UsageOptions) -> Body {
    let mut body = Body::new(GET_FAX_USAGE);
    body.put_period(options.period.as_ref());
    body.put_include_sub_users(options.include_sub_users);
    body
}

pub fn decode_usage_response(json: &str) -> Result<Decoded<Vec<UsageEntry>>, ResponseError> {
    decode_response(json)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_usage_body_params() {
        let options = UsageOptions {
            period: None,
            include_sub_users: true,
        };
        assert_eq!(
            encode_usage_body(&options).into_value(),
            json!({"action": "Get_Fax_Usage", "sIncludeSubUsers": "Y"})
        );
    }

    #[test]
    fn decode_usage_response_maps_rows() {
        let json = r#"
        {
          "Status": "Success",
          "Result": [
            {
              "Period": "ALL",
              "ClientName": "Acme",
              "SubUserID": 0,
              "BillingNumber": "4161112222",
              "NumberOfFaxes": "12",
              "NumberOfPages": 30,
              "UserID": "925"
            }
          ]
        }
        "#;
        let decoded = decode_usage_response(json).unwrap();
        assert_eq!(
            decoded.value,
            vec![UsageEntry {
                period: "ALL".to_owned(),
                client_name: "Acme".to_owned(),
                billing_number: "4161112222".to_owned(),
                user_id: 925,
                sub_user_id: 0,
                number_of_faxes: 12,
                number_of_pages: 30,
            }]
        );
    }
}
