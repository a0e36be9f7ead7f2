use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use time::macros::format_description;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SRFax account number (`access_id`).
///
/// Invariant: greater than zero.
pub struct AccessId(u64);

impl AccessId {
    /// JSON field name used by SRFax (`access_id`).
    pub const FIELD: &'static str = "access_id";

    /// Create a validated [`AccessId`].
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::NotPositive { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the account number.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SRFax account password (`access_pwd`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct AccessPassword(String);

impl AccessPassword {
    /// JSON field name used by SRFax (`access_pwd`).
    pub const FIELD: &'static str = "access_pwd";

    /// Create a validated [`AccessPassword`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessPassword(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Numeric fax id (`sFaxDetailsID`) returned when a fax is queued or forwarded.
///
/// Invariant: greater than zero.
pub struct FaxDetailsId(u64);

impl FaxDetailsId {
    /// JSON field name used by SRFax (`sFaxDetailsID`).
    pub const FIELD: &'static str = "sFaxDetailsID";

    /// Create a validated [`FaxDetailsId`].
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::NotPositive { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Parse an id from its decimal text.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                format: "decimal id",
                input: value.to_owned(),
            });
        }
        let parsed = trimmed
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidFormat {
                field: Self::FIELD,
                format: "decimal id",
                input: value.to_owned(),
            })?;
        Self::new(parsed)
    }

    /// Get the numeric id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FaxDetailsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Fax file name (`sFaxFileName`) as listed by the inbox/outbox calls.
///
/// The expected form is `20180101230101-8812-34_0|31524120`, where the numeric
/// fax id follows the pipe. Invariant: non-empty after trimming and contains `|`.
pub struct FaxFileName(String);

impl FaxFileName {
    /// JSON field name used by SRFax (`sFaxFileName`).
    pub const FIELD: &'static str = "sFaxFileName";

    /// Create a validated [`FaxFileName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.contains('|') {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                format: "<name>|<id>",
                input: value,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the file name as sent to SRFax.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fax id encoded after the last pipe of the file name.
    pub fn details_id(&self) -> Result<FaxDetailsId, ValidationError> {
        details_id_from_name(&self.0)
    }
}

/// Extract the numeric fax id from a listed file name.
///
/// The id is whatever follows the last `|`; a name without a pipe is parsed as a
/// bare id. `"20180101230101-8812-34_0|31524120"` yields `31524120`.
pub fn details_id_from_name(name: &str) -> Result<FaxDetailsId, ValidationError> {
    let last = name.rsplit('|').next().unwrap_or(name);
    FaxDetailsId::parse(last)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A fax addressed either by numeric id or by file name.
///
/// SRFax accepts either `sFaxDetailsID` or `sFaxFileName` (never both) for the
/// retrieve/forward/viewed-status calls.
pub enum FaxIdentifier {
    DetailsId(FaxDetailsId),
    FileName(FaxFileName),
}

impl FaxIdentifier {
    /// Parse an identifier: values containing `|` are file names, anything else
    /// must be a numeric id.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.contains('|') {
            Ok(Self::FileName(FaxFileName::new(value)?))
        } else {
            Ok(Self::DetailsId(FaxDetailsId::parse(value)?))
        }
    }
}

impl From<FaxDetailsId> for FaxIdentifier {
    fn from(value: FaxDetailsId) -> Self {
        Self::DetailsId(value)
    }
}

impl From<FaxFileName> for FaxIdentifier {
    fn from(value: FaxFileName) -> Self {
        Self::FileName(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Sender's fax number (`sCallerID`).
///
/// Invariant: exactly 10 digits.
pub struct CallerId(u64);

impl CallerId {
    /// JSON field name used by SRFax (`sCallerID`).
    pub const FIELD: &'static str = "sCallerID";
    const DIGITS: usize = 10;

    /// Create a validated [`CallerId`] from its digits.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();
        let number = parse_digits(Self::FIELD, Self::DIGITS, value)?;
        Ok(Self(number))
    }

    /// Get the caller id as a number (the wire representation).
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination fax number (`sToFaxNumber`).
///
/// Invariant: exactly 11 digits (country code included).
pub struct FaxNumber(String);

impl FaxNumber {
    /// JSON field name used by SRFax (`sToFaxNumber`).
    pub const FIELD: &'static str = "sToFaxNumber";
    const DIGITS: usize = 11;

    /// Create a validated [`FaxNumber`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();
        parse_digits(Self::FIELD, Self::DIGITS, value)?;
        Ok(Self(value.to_owned()))
    }

    /// Borrow the digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn parse_digits(field: &'static str, expected: usize, value: &str) -> Result<u64, ValidationError> {
    let invalid = || ValidationError::InvalidDigits {
        field,
        expected,
        input: value.to_owned(),
    };
    if value.len() != expected || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<u64>().map_err(|_| invalid())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender's email address (`sSenderEmail`).
///
/// Invariant: non-empty after trimming and contains `@`.
pub struct SenderEmail(String);

impl SenderEmail {
    /// JSON field name used by SRFax (`sSenderEmail`).
    pub const FIELD: &'static str = "sSenderEmail";

    /// Create a validated [`SenderEmail`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(ValidationError::InvalidEmail { input: value }),
        }
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A document to fax: file name plus base64-encoded content.
///
/// Invariant: both parts are non-empty.
pub struct FaxFile {
    name: String,
    content: String,
}

impl FaxFile {
    /// Prefix of the indexed file name keys (`sFileName_0`, `sFileName_1`, ...).
    pub const NAME_PREFIX: &'static str = "sFileName_";
    /// Prefix of the indexed content keys (`sFileContent_0`, ...).
    pub const CONTENT_PREFIX: &'static str = "sFileContent_";

    /// Create a file from content that is already base64-encoded.
    pub fn new(
        name: impl Into<String>,
        base64_content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let content = base64_content.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::NAME_PREFIX,
            });
        }
        if content.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::CONTENT_PREFIX,
            });
        }
        Ok(Self { name, content })
    }

    /// Create a file from raw bytes, encoding them as standard base64.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, ValidationError> {
        Self::new(name, STANDARD.encode(bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of dial retries (`sRetries`).
///
/// Invariant: `0..=6`.
pub struct Retries(u8);

impl Retries {
    /// JSON field name used by SRFax (`sRetries`).
    pub const FIELD: &'static str = "sRetries";

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 6;

    /// Create a validated retry count.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::RetriesOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Calendar date used for report ranges (`sStartDate`/`sEndDate`), `YYYYMMDD`.
pub struct ReportDate(String);

impl ReportDate {
    /// Create a validated report date.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let format = format_description!("[year][month][day]");
        if value.len() != 8 || time::Date::parse(&value, format).is_err() {
            return Err(ValidationError::InvalidFormat {
                field: "sStartDate/sEndDate",
                format: "YYYYMMDD",
                input: value,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Date a queued fax should be sent (`sQueueFaxDate`), `YYYY-MM-DD`.
pub struct ScheduleDate(String);

impl ScheduleDate {
    /// JSON field name used by SRFax (`sQueueFaxDate`).
    pub const FIELD: &'static str = "sQueueFaxDate";

    /// Create a validated schedule date.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let format = format_description!("[year]-[month]-[day]");
        if value.len() != 10 || time::Date::parse(&value, format).is_err() {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                format: "YYYY-MM-DD",
                input: value,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Time of day a queued fax should be sent (`sQueueFaxTime`), 24-hour `HH:MM`.
pub struct ScheduleTime(String);

impl ScheduleTime {
    /// JSON field name used by SRFax (`sQueueFaxTime`).
    pub const FIELD: &'static str = "sQueueFaxTime";

    /// Create a validated schedule time.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let format = format_description!("[hour]:[minute]");
        if value.len() != 5 || time::Time::parse(&value, format).is_err() {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                format: "HH:MM",
                input: value,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Absolute URL SRFax calls when a fax finishes (`sNotifyURL`).
pub struct NotifyUrl(String);

impl NotifyUrl {
    /// JSON field name used by SRFax (`sNotifyURL`).
    pub const FIELD: &'static str = "sNotifyURL";

    /// Create a validated notify URL.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let Ok(parsed) = url::Url::parse(trimmed) else {
            return Err(ValidationError::InvalidUrl { input: value });
        };
        Ok(Self(parsed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Fax direction (`sDirection`).
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    /// JSON field name used by SRFax (`sDirection`).
    pub const FIELD: &'static str = "sDirection";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "IN",
            Self::Outbound => "OUT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Sending mode (`sFaxType`).
pub enum FaxType {
    /// Exactly one destination number.
    #[default]
    Single,
    /// One or more destination numbers.
    Broadcast,
}

impl FaxType {
    /// JSON field name used by SRFax (`sFaxType`).
    pub const FIELD: &'static str = "sFaxType";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Broadcast => "BROADCAST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Inbox filter on viewed status (`sViewedStatus`).
pub enum ViewedFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl ViewedFilter {
    /// JSON field name used by SRFax (`sViewedStatus`).
    pub const FIELD: &'static str = "sViewedStatus";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Read => "READ",
            Self::Unread => "UNREAD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// File format of retrieved faxes (`sFaxFormat`).
pub enum FaxFormat {
    Pdf,
    Tiff,
}

impl FaxFormat {
    /// JSON field name used by SRFax (`sFaxFormat`).
    pub const FIELD: &'static str = "sFaxFormat";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Tiff => "TIF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Read/unread marker (`sMarkasViewed`).
pub enum ViewedMark {
    Read,
    Unread,
}

impl ViewedMark {
    /// JSON field name used by SRFax (`sMarkasViewed`).
    pub const FIELD: &'static str = "sMarkasViewed";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "Y",
            Self::Unread => "N",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Cover page template (`sCoverPage`).
pub enum CoverPage {
    Basic,
    Standard,
    Company,
    Personal,
}

impl CoverPage {
    /// JSON field name used by SRFax (`sCoverPage`).
    pub const FIELD: &'static str = "sCoverPage";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Company => "Company",
            Self::Personal => "Personal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
/// Reporting period for inbox/outbox/usage calls (`sPeriod`).
pub enum Period {
    #[default]
    All,
    Range {
        start: ReportDate,
        end: ReportDate,
    },
}

impl Period {
    /// JSON field name used by SRFax (`sPeriod`).
    pub const FIELD: &'static str = "sPeriod";

    /// Convenience constructor validating both `YYYYMMDD` dates.
    pub fn range(
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Range {
            start: ReportDate::new(start)?,
            end: ReportDate::new(end)?,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Range { .. } => "RANGE",
        }
    }
}
