//! Error types and the response classifier.
//!
//! A failed response is mapped through the `reason` discriminator of the JSON
//! error envelope into one [`ApiError`] variant. The mapping is a closed table
//! ([`ErrorReason`]); anything it does not recognize lands in
//! [`ApiError::Api`] with the raw discriminator preserved.

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Fields carried by every structured API error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetails {
    pub status_code: u16,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl ErrorDetails {
    /// Validation messages joined with `", "`, if any were sent.
    pub fn joined_errors(&self) -> Option<String> {
        self.errors.as_ref().map(|errors| errors.join(", "))
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "status_code={}, message={:?}, errors={:?}",
            self.status_code,
            self.message.as_deref().unwrap_or(""),
            self.joined_errors().unwrap_or_default()
        )
    }
}

/// Error type returned by every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport fault: connect, DNS, TLS or timeout.
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response whose body was not JSON.
    #[error("HTTP status {status_code}")]
    Status { status_code: u16 },

    #[error("Bad credentials ({0})")]
    BadCredentials(ErrorDetails),

    #[error("Bad auth token ({0})")]
    BadAuthToken(ErrorDetails),

    #[error("Page not found ({0})")]
    PageNotFound(ErrorDetails),

    #[error("Record not found ({0})")]
    RecordNotFound(ErrorDetails),

    #[error("Internal server error ({0})")]
    InternalServerError(ErrorDetails),

    #[error("Rate limit exceeded ({0})")]
    RateLimit(ErrorDetails),

    #[error("Order is not valid ({0})")]
    OrderIsNotValid(ErrorDetails),

    #[error("Order not found ({0})")]
    OrderNotFound(ErrorDetails),

    #[error("Refund is not valid ({0})")]
    RefundIsNotValid(ErrorDetails),

    #[error("Refund not found ({0})")]
    RefundNotFound(ErrorDetails),

    #[error("Ledger account not found ({0})")]
    LedgerAccountNotFound(ErrorDetails),

    #[error("Withdrawal not found ({0})")]
    WithdrawalNotFound(ErrorDetails),

    /// Structured error with an absent or unrecognized discriminator.
    #[error("API error (reason={reason:?}, {details})")]
    Api {
        reason: Option<String>,
        details: ErrorDetails,
    },

    /// A successful body did not match the expected shape.
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Caller input rejected before dispatch.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// The closed discriminator for typed variants.
    pub fn kind(&self) -> Option<ErrorReason> {
        let kind = match self {
            ApiError::BadCredentials(_) => ErrorReason::BadCredentials,
            ApiError::BadAuthToken(_) => ErrorReason::BadAuthToken,
            ApiError::PageNotFound(_) => ErrorReason::PageNotFound,
            ApiError::RecordNotFound(_) => ErrorReason::RecordNotFound,
            ApiError::InternalServerError(_) => ErrorReason::InternalServerError,
            ApiError::RateLimit(_) => ErrorReason::RateLimit,
            ApiError::OrderIsNotValid(_) => ErrorReason::OrderIsNotValid,
            ApiError::OrderNotFound(_) => ErrorReason::OrderNotFound,
            ApiError::RefundIsNotValid(_) => ErrorReason::RefundIsNotValid,
            ApiError::RefundNotFound(_) => ErrorReason::RefundNotFound,
            ApiError::LedgerAccountNotFound(_) => ErrorReason::LedgerAccountNotFound,
            ApiError::WithdrawalNotFound(_) => ErrorReason::WithdrawalNotFound,
            _ => return None,
        };
        Some(kind)
    }

    /// Structured error fields, when the failure body was JSON.
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            ApiError::BadCredentials(d)
            | ApiError::BadAuthToken(d)
            | ApiError::PageNotFound(d)
            | ApiError::RecordNotFound(d)
            | ApiError::InternalServerError(d)
            | ApiError::RateLimit(d)
            | ApiError::OrderIsNotValid(d)
            | ApiError::OrderNotFound(d)
            | ApiError::RefundIsNotValid(d)
            | ApiError::RefundNotFound(d)
            | ApiError::LedgerAccountNotFound(d)
            | ApiError::WithdrawalNotFound(d) => Some(d),
            ApiError::Api { details, .. } => Some(details),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status_code } => Some(*status_code),
            #[cfg(feature = "http")]
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            other => other.details().map(|d| d.status_code),
        }
    }

    /// The discriminator as sent by the API (canonical name for typed variants).
    pub fn reason(&self) -> Option<&str> {
        match self {
            ApiError::Api { reason, .. } => reason.as_deref(),
            other => other.kind().map(ErrorReason::as_str),
        }
    }

    /// Server-provided human-readable message.
    pub fn message(&self) -> Option<&str> {
        self.details().and_then(|d| d.message.as_deref())
    }

    /// Whether this is a transport timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            ApiError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

// ─── Discriminator table ─────────────────────────────────────────────────────

/// Known values of the `reason` field in a failure body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    BadCredentials,
    BadAuthToken,
    PageNotFound,
    RecordNotFound,
    InternalServerError,
    RateLimit,
    OrderIsNotValid,
    OrderNotFound,
    RefundIsNotValid,
    RefundNotFound,
    LedgerAccountNotFound,
    WithdrawalNotFound,
}

impl ErrorReason {
    pub const ALL: [ErrorReason; 12] = [
        ErrorReason::BadCredentials,
        ErrorReason::BadAuthToken,
        ErrorReason::PageNotFound,
        ErrorReason::RecordNotFound,
        ErrorReason::InternalServerError,
        ErrorReason::RateLimit,
        ErrorReason::OrderIsNotValid,
        ErrorReason::OrderNotFound,
        ErrorReason::RefundIsNotValid,
        ErrorReason::RefundNotFound,
        ErrorReason::LedgerAccountNotFound,
        ErrorReason::WithdrawalNotFound,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorReason::BadCredentials => "BadCredentials",
            ErrorReason::BadAuthToken => "BadAuthToken",
            ErrorReason::PageNotFound => "PageNotFound",
            ErrorReason::RecordNotFound => "RecordNotFound",
            ErrorReason::InternalServerError => "InternalServerError",
            ErrorReason::RateLimit => "RateLimit",
            ErrorReason::OrderIsNotValid => "OrderIsNotValid",
            ErrorReason::OrderNotFound => "OrderNotFound",
            ErrorReason::RefundIsNotValid => "RefundIsNotValid",
            ErrorReason::RefundNotFound => "RefundNotFound",
            ErrorReason::LedgerAccountNotFound => "LedgerAccountNotFound",
            ErrorReason::WithdrawalNotFound => "WithdrawalNotFound",
        }
    }

    /// Look up a discriminator. Both `OrderNotFound` and
    /// `OrderNotFoundException` resolve to the same reason.
    pub fn from_discriminator(raw: &str) -> Option<Self> {
        let name = raw.strip_suffix("Exception").unwrap_or(raw);
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }

    /// Build the typed error for this reason.
    pub fn into_error(self, details: ErrorDetails) -> ApiError {
        match self {
            ErrorReason::BadCredentials => ApiError::BadCredentials(details),
            ErrorReason::BadAuthToken => ApiError::BadAuthToken(details),
            ErrorReason::PageNotFound => ApiError::PageNotFound(details),
            ErrorReason::RecordNotFound => ApiError::RecordNotFound(details),
            ErrorReason::InternalServerError => ApiError::InternalServerError(details),
            ErrorReason::RateLimit => ApiError::RateLimit(details),
            ErrorReason::OrderIsNotValid => ApiError::OrderIsNotValid(details),
            ErrorReason::OrderNotFound => ApiError::OrderNotFound(details),
            ErrorReason::RefundIsNotValid => ApiError::RefundIsNotValid(details),
            ErrorReason::RefundNotFound => ApiError::RefundNotFound(details),
            ErrorReason::LedgerAccountNotFound => ApiError::LedgerAccountNotFound(details),
            ErrorReason::WithdrawalNotFound => ApiError::WithdrawalNotFound(details),
        }
    }
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Classifier ──────────────────────────────────────────────────────────────

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub reason: Option<String>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl ErrorEnvelope {
    /// Read the envelope fields from a JSON body.
    ///
    /// Returns `None` unless the body is an object. Each field is read on its
    /// own: a field of the wrong type counts as absent, and only the string
    /// entries of `errors` are kept.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let body = value.as_object()?;
        let text = |key: &str| body.get(key).and_then(|v| v.as_str()).map(str::to_string);
        let errors = body.get("errors").and_then(|v| v.as_array()).map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        });
        Some(Self {
            reason: text("reason"),
            message: text("message"),
            errors,
        })
    }

    /// Map the envelope to its typed error.
    pub fn into_error(self, status_code: u16) -> ApiError {
        let details = ErrorDetails {
            status_code,
            message: self.message,
            errors: self.errors,
        };
        match self.reason.as_deref().and_then(ErrorReason::from_discriminator) {
            Some(kind) => kind.into_error(details),
            None => ApiError::Api {
                reason: self.reason,
                details,
            },
        }
    }
}

/// Decide success or failure for a completed response.
///
/// 2xx passes. Anything else becomes an [`ApiError`]: a typed variant when
/// the body is a JSON envelope, [`ApiError::Status`] when it is not.
pub fn classify(status_code: u16, body: &str) -> ApiResult<()> {
    if (200..300).contains(&status_code) {
        return Ok(());
    }
    Err(error_from_body(status_code, body))
}

/// Build the error for a failed response body.
///
/// Only a JSON object counts as an envelope; a non-JSON body or any other
/// JSON value yields [`ApiError::Status`].
pub fn error_from_body(status_code: u16, body: &str) -> ApiError {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(ErrorEnvelope::from_value)
        .map(|envelope| envelope.into_error(status_code))
        .unwrap_or(ApiError::Status { status_code })
}
