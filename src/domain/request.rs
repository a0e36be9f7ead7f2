use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CallerId, CoverPage, Direction, FaxDetailsId, FaxFile, FaxFormat, FaxIdentifier, FaxNumber,
    FaxType, NotifyUrl, Period, Retries, ScheduleDate, ScheduleTime, SenderEmail, ViewedFilter,
    ViewedMark,
};

/// Sender and destination data shared by queue and forward requests.
#[derive(Debug, Clone)]
pub struct Recipients {
    caller_id: CallerId,
    sender_email: SenderEmail,
    fax_type: FaxType,
    to: Vec<FaxNumber>,
}

impl Recipients {
    /// Validate the destination list against the fax type.
    ///
    /// [`FaxType::Single`] takes exactly one number, [`FaxType::Broadcast`] one or more.
    pub fn new(
        caller_id: CallerId,
        sender_email: SenderEmail,
        fax_type: FaxType,
        to: Vec<FaxNumber>,
    ) -> Result<Self, ValidationError> {
        if to.is_empty() {
            return Err(ValidationError::Empty {
                field: FaxNumber::FIELD,
            });
        }
        if fax_type == FaxType::Single && to.len() > 1 {
            return Err(ValidationError::TooManyRecipients {
                max: 1,
                actual: to.len(),
            });
        }
        Ok(Self {
            caller_id,
            sender_email,
            fax_type,
            to,
        })
    }

    /// Single-destination shorthand.
    pub fn single(caller_id: CallerId, sender_email: SenderEmail, to: FaxNumber) -> Self {
        Self {
            caller_id,
            sender_email,
            fax_type: FaxType::Single,
            to: vec![to],
        }
    }

    pub fn caller_id(&self) -> CallerId {
        self.caller_id
    }

    pub fn sender_email(&self) -> &SenderEmail {
        &self.sender_email
    }

    pub fn fax_type(&self) -> FaxType {
        self.fax_type
    }

    pub fn to(&self) -> &[FaxNumber] {
        &self.to
    }
}

/// Cover page text. Ignored by SRFax unless a cover page template is selected.
#[derive(Debug, Clone, Default)]
pub struct CoverPageText {
    pub from_name: Option<String>,
    pub to_name: Option<String>,
    pub organization: Option<String>,
    pub subject: Option<String>,
    pub comments: Option<String>,
}

/// Optional arguments for [`QueueFax`].
///
/// If the account's default cover page is "Attachments ONLY" SRFax never
/// generates a cover page, whatever is set here.
#[derive(Debug, Clone, Default)]
pub struct QueueFaxOptions {
    pub retries: Option<Retries>,
    pub account_code: Option<String>,
    pub fax_from_header: Option<String>,
    pub cover_page: Option<CoverPage>,
    pub cover_page_text: CoverPageText,
    pub notify_url: Option<NotifyUrl>,
    pub queue_date: Option<ScheduleDate>,
    pub queue_time: Option<ScheduleTime>,
}

/// `Queue_Fax` request.
#[derive(Debug, Clone)]
pub struct QueueFax {
    recipients: Recipients,
    files: Vec<FaxFile>,
    options: QueueFaxOptions,
}

impl QueueFax {
    /// Build a queue request. An empty file list is only accepted when a cover
    /// page is requested (SRFax can send a cover page on its own).
    pub fn new(
        recipients: Recipients,
        files: Vec<FaxFile>,
        options: QueueFaxOptions,
    ) -> Result<Self, ValidationError> {
        if files.is_empty() && options.cover_page.is_none() {
            return Err(ValidationError::NothingToSend);
        }
        Ok(Self {
            recipients,
            files,
            options,
        })
    }

    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    pub fn files(&self) -> &[FaxFile] {
        &self.files
    }

    pub fn options(&self) -> &QueueFaxOptions {
        &self.options
    }
}

/// Optional arguments for [`ForwardFax`].
#[derive(Debug, Clone, Default)]
pub struct ForwardFaxOptions {
    pub sub_user_id: Option<u64>,
    pub account_code: Option<String>,
    pub retries: Option<Retries>,
    pub fax_from_header: Option<String>,
    pub notify_url: Option<NotifyUrl>,
    pub queue_date: Option<ScheduleDate>,
    pub queue_time: Option<ScheduleTime>,
}

/// `Forward_Fax` request.
#[derive(Debug, Clone)]
pub struct ForwardFax {
    pub fax: FaxIdentifier,
    pub direction: Direction,
    pub recipients: Recipients,
    pub options: ForwardFaxOptions,
}

/// Optional arguments for the inbox listing.
#[derive(Debug, Clone, Default)]
pub struct InboxOptions {
    pub period: Option<Period>,
    pub viewed: Option<ViewedFilter>,
    /// Include faxes received by sub users; adds `User_ID`/`User_FaxNumber` to each entry.
    pub include_sub_users: bool,
}

/// Optional arguments for the outbox listing.
#[derive(Debug, Clone, Default)]
pub struct OutboxOptions {
    pub period: Option<Period>,
    pub include_sub_users: bool,
}

/// Optional arguments for the usage report.
#[derive(Debug, Clone, Default)]
pub struct UsageOptions {
    pub period: Option<Period>,
    pub include_sub_users: bool,
}

/// Optional arguments for [`RetrieveFax`].
#[derive(Debug, Clone, Default)]
pub struct RetrieveFaxOptions {
    pub sub_user_id: Option<u64>,
    /// Defaults to the account setting when unset.
    pub format: Option<FaxFormat>,
    pub mark_as: Option<ViewedMark>,
}

/// `Retrieve_Fax` request.
#[derive(Debug, Clone)]
pub struct RetrieveFax {
    pub fax: FaxIdentifier,
    pub direction: Direction,
    pub options: RetrieveFaxOptions,
}

/// `Update_Viewed_Status` request.
#[derive(Debug, Clone)]
pub struct UpdateViewedStatus {
    pub fax: FaxIdentifier,
    pub direction: Direction,
    pub mark_as: ViewedMark,
}

/// `Delete_Fax` request.
#[derive(Debug, Clone)]
pub struct DeleteFax {
    faxes: Vec<FaxIdentifier>,
    direction: Direction,
}

impl DeleteFax {
    /// Build a delete request for one or more faxes in the same direction.
    pub fn new(faxes: Vec<FaxIdentifier>, direction: Direction) -> Result<Self, ValidationError> {
        if faxes.is_empty() {
            return Err(ValidationError::Empty {
                field: FaxDetailsId::FIELD,
            });
        }
        Ok(Self { faxes, direction })
    }

    pub fn one(fax: impl Into<FaxIdentifier>, direction: Direction) -> Self {
        Self {
            faxes: vec![fax.into()],
            direction,
        }
    }

    pub fn faxes(&self) -> &[FaxIdentifier] {
        &self.faxes
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// `Get_MultiFaxStatus` request.
#[derive(Debug, Clone)]
pub struct MultiFaxStatus {
    ids: Vec<FaxDetailsId>,
}

impl MultiFaxStatus {
    pub fn new(ids: Vec<FaxDetailsId>) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::Empty {
                field: FaxDetailsId::FIELD,
            });
        }
        Ok(Self { ids })
    }

    pub fn ids(&self) -> &[FaxDetailsId] {
        &self.ids
    }
}
