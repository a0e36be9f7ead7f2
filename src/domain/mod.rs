//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CoverPageText, DeleteFax, ForwardFax, ForwardFaxOptions, InboxOptions, MultiFaxStatus,
    OutboxOptions, QueueFax, QueueFaxOptions, Recipients, RetrieveFax, RetrieveFaxOptions,
    UpdateViewedStatus, UsageOptions,
};
pub use response::{
    Acknowledgement, FaxStatus, Inbox, InboxEntry, Outbox, OutboxEntry, QueuedFax, RetrievedFax,
    UsageEntry,
};
pub use validation::ValidationError;
pub use value::{
    AccessId, AccessPassword, CallerId, CoverPage, Direction, FaxDetailsId, FaxFile, FaxFileName,
    FaxFormat, FaxIdentifier, FaxNumber, FaxType, NotifyUrl, Period, ReportDate, Retries,
    ScheduleDate, ScheduleTime, SenderEmail, ViewedFilter, ViewedMark, details_id_from_name,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_id_rejects_zero() {
        assert!(matches!(
            AccessId::new(0),
            Err(ValidationError::NotPositive {
                field: AccessId::FIELD
            })
        ));
        assert_eq!(AccessId::new(925).unwrap().value(), 925);
    }

    #[test]
    fn access_password_rejects_empty_and_hides_value() {
        assert!(matches!(
            AccessPassword::new(""),
            Err(ValidationError::Empty {
                field: AccessPassword::FIELD
            })
        ));
        let pwd = AccessPassword::new("secret").unwrap();
        assert!(!format!("{pwd:?}").contains("secret"));
    }

    #[test]
    fn details_id_from_name_takes_digits_after_last_pipe() {
        let cases: &[(&str, Option<u64>)] = &[
            ("20180101230101-8812-34_0|31524120", Some(31524120)),
            ("|31524120", Some(31524120)),
            ("20180101230101", Some(20180101230101)),
            ("20180101230101-8812-34_0|31524120|2222|", None),
            ("20180101230101-8812-34_0|31524120|9999", Some(9999)),
            ("31524120|", None),
            ("|", None),
            ("20180101230101-|", None),
            ("", None),
        ];
        for (input, expected) in cases {
            let got = details_id_from_name(input).ok().map(FaxDetailsId::value);
            assert_eq!(got, *expected, "input: {input:?}");
        }
    }

    #[test]
    fn fax_identifier_parse_picks_file_name_or_id() {
        assert!(matches!(
            FaxIdentifier::parse("20180101230101-8812-34_0|31524120").unwrap(),
            FaxIdentifier::FileName(_)
        ));
        assert_eq!(
            FaxIdentifier::parse("31524120").unwrap(),
            FaxIdentifier::DetailsId(FaxDetailsId::new(31524120).unwrap())
        );
        assert!(FaxIdentifier::parse("abc").is_err());
        assert!(FaxIdentifier::parse("0").is_err());
    }

    #[test]
    fn caller_id_and_fax_number_digit_counts_are_enforced() {
        assert_eq!(CallerId::new("4161112222").unwrap().value(), 4161112222);
        assert!(CallerId::new("416111222").is_err());
        assert!(CallerId::new("41611122a2").is_err());

        assert_eq!(FaxNumber::new("14161112222").unwrap().as_str(), "14161112222");
        assert!(FaxNumber::new("4161112222").is_err());
    }

    #[test]
    fn sender_email_requires_at_sign() {
        assert!(SenderEmail::new("email@example.com").is_ok());
        assert!(SenderEmail::new("   ").is_err());
        assert!(matches!(
            SenderEmail::new("example.com"),
            Err(ValidationError::InvalidEmail { .. })
        ));
    }

    #[test]
    fn date_and_time_formats_are_enforced() {
        assert!(ReportDate::new("19870220").is_ok());
        assert!(ReportDate::new("198702-20").is_err());
        assert!(ReportDate::new("19871320").is_err());

        assert!(ScheduleDate::new("1987-02-20").is_ok());
        assert!(ScheduleDate::new("19870220").is_err());

        assert!(ScheduleTime::new("10:20").is_ok());
        assert!(ScheduleTime::new("25:00").is_err());
        assert!(ScheduleTime::new("1020").is_err());
    }

    #[test]
    fn retries_range_is_enforced() {
        assert!(Retries::new(0).is_ok());
        assert!(Retries::new(6).is_ok());
        assert!(Retries::new(7).is_err());
    }

    #[test]
    fn notify_url_must_be_absolute() {
        assert!(NotifyUrl::new("https://example.com/hook").is_ok());
        assert!(NotifyUrl::new("/relative").is_err());
    }

    #[test]
    fn fax_file_from_bytes_encodes_base64() {
        let file = FaxFile::from_bytes("a.txt", b"hello").unwrap();
        assert_eq!(file.content(), "aGVsbG8=");
        assert!(FaxFile::new("", "aGVsbG8=").is_err());
        assert!(FaxFile::new("a.txt", "").is_err());
    }

    fn recipients() -> Recipients {
        Recipients::single(
            CallerId::new("4161112222").unwrap(),
            SenderEmail::new("email@example.com").unwrap(),
            FaxNumber::new("14161112222").unwrap(),
        )
    }

    #[test]
    fn single_fax_type_takes_one_number() {
        let numbers = vec![
            FaxNumber::new("14161112222").unwrap(),
            FaxNumber::new("14161113333").unwrap(),
        ];
        let err = Recipients::new(
            CallerId::new("4161112222").unwrap(),
            SenderEmail::new("email@example.com").unwrap(),
            FaxType::Single,
            numbers.clone(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooManyRecipients { max: 1, actual: 2 }
        ));

        let ok = Recipients::new(
            CallerId::new("4161112222").unwrap(),
            SenderEmail::new("email@example.com").unwrap(),
            FaxType::Broadcast,
            numbers,
        )
        .unwrap();
        assert_eq!(ok.to().len(), 2);
    }

    #[test]
    fn queue_fax_needs_files_or_cover_page() {
        let err = QueueFax::new(recipients(), Vec::new(), QueueFaxOptions::default()).unwrap_err();
        assert_eq!(err, ValidationError::NothingToSend);

        let cover_only = QueueFax::new(
            recipients(),
            Vec::new(),
            QueueFaxOptions {
                cover_page: Some(CoverPage::Basic),
                ..Default::default()
            },
        );
        assert!(cover_only.is_ok());
    }

    #[test]
    fn delete_and_multi_status_require_ids() {
        assert!(DeleteFax::new(Vec::new(), Direction::Inbound).is_err());
        assert!(MultiFaxStatus::new(Vec::new()).is_err());
    }

    #[test]
    fn inbox_details_ids_fail_on_bad_file_name() {
        let inbox = Inbox {
            entries: vec![
                InboxEntry {
                    file_name: "20180101230101-8812-34_0|31524120".to_owned(),
                    ..Default::default()
                },
                InboxEntry {
                    file_name: "broken|".to_owned(),
                    ..Default::default()
                },
            ],
        };
        assert_eq!(inbox.len(), 2);
        assert!(inbox.details_ids().is_err());

        let inbox = Inbox {
            entries: inbox.entries[..1].to_vec(),
        };
        assert_eq!(
            inbox.details_ids().unwrap(),
            vec![FaxDetailsId::new(31524120).unwrap()]
        );
    }
}
