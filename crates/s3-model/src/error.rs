//! Error type shared by the model layer and the callers that consume it.

use std::fmt;

/// Error codes surfaced by the object operations this crate models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum S3ErrorCode {
    /// Access denied.
    AccessDenied,
    /// Upload exceeds the maximum allowed object size.
    EntityTooLarge,
    /// Internal server error.
    InternalError,
    /// A request argument is malformed; the only code raised by the model
    /// layer itself (duplicate metadata key).
    #[default]
    InvalidArgument,
    /// The Content-MD5 does not match the body.
    InvalidDigest,
    /// The operation is not valid for the object's current storage tier.
    InvalidObjectState,
    /// The requested byte range cannot be satisfied.
    InvalidRange,
    /// The storage class is not valid.
    InvalidStorageClass,
    /// The object key exceeds the maximum length.
    KeyTooLongError,
    /// User metadata exceeds the allowed size.
    MetadataTooLarge,
    /// The Content-Length header is missing.
    MissingContentLength,
    /// The bucket does not exist.
    NoSuchBucket,
    /// The object key does not exist.
    NoSuchKey,
    /// The multipart upload does not exist.
    NoSuchUpload,
    /// The object version does not exist.
    NoSuchVersion,
    /// Conditional read matched; HTTP 304.
    NotModified,
    /// The copy source is archived and not currently readable.
    ObjectNotInActiveTierError,
    /// A request precondition did not hold.
    PreconditionFailed,
    /// A code outside the standard set.
    Custom(&'static str),
}

impl S3ErrorCode {
    /// Returns the wire form of the error code.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessDenied => "AccessDenied",
            Self::EntityTooLarge => "EntityTooLarge",
            Self::InternalError => "InternalError",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidDigest => "InvalidDigest",
            Self::InvalidObjectState => "InvalidObjectState",
            Self::InvalidRange => "InvalidRange",
            Self::InvalidStorageClass => "InvalidStorageClass",
            Self::KeyTooLongError => "KeyTooLongError",
            Self::MetadataTooLarge => "MetadataTooLarge",
            Self::MissingContentLength => "MissingContentLength",
            Self::NoSuchBucket => "NoSuchBucket",
            Self::NoSuchKey => "NoSuchKey",
            Self::NoSuchUpload => "NoSuchUpload",
            Self::NoSuchVersion => "NoSuchVersion",
            Self::NotModified => "NotModified",
            Self::ObjectNotInActiveTierError => "ObjectNotInActiveTierError",
            Self::PreconditionFailed => "PreconditionFailed",
            Self::Custom(s) => s,
        }
    }

    /// Returns the HTTP status a service would answer with for this code.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::EntityTooLarge
            | Self::InvalidArgument
            | Self::InvalidDigest
            | Self::InvalidStorageClass
            | Self::KeyTooLongError
            | Self::MetadataTooLarge => http::StatusCode::BAD_REQUEST,
            Self::AccessDenied | Self::InvalidObjectState | Self::ObjectNotInActiveTierError => {
                http::StatusCode::FORBIDDEN
            }
            Self::NoSuchBucket | Self::NoSuchKey | Self::NoSuchUpload | Self::NoSuchVersion => {
                http::StatusCode::NOT_FOUND
            }
            Self::MissingContentLength => http::StatusCode::LENGTH_REQUIRED,
            Self::NotModified => http::StatusCode::NOT_MODIFIED,
            Self::PreconditionFailed => http::StatusCode::PRECONDITION_FAILED,
            Self::InvalidRange => http::StatusCode::RANGE_NOT_SATISFIABLE,
            Self::InternalError | Self::Custom(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the stock message for this code.
    #[must_use]
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::AccessDenied => "Access Denied",
            Self::EntityTooLarge => "Your proposed upload exceeds the maximum allowed size",
            Self::InternalError => "Internal server error",
            Self::InvalidArgument => "Invalid Argument",
            Self::InvalidDigest => "The Content-MD5 you specified is not valid",
            Self::InvalidObjectState => {
                "The operation is not valid for the current state of the object"
            }
            Self::InvalidRange => "The requested range cannot be satisfied",
            Self::InvalidStorageClass => "The storage class you specified is not valid",
            Self::KeyTooLongError => "Your key is too long",
            Self::MetadataTooLarge => {
                "Your metadata headers exceed the maximum allowed metadata size"
            }
            Self::MissingContentLength => "You must provide the Content-Length HTTP header",
            Self::NoSuchBucket => "The specified bucket does not exist",
            Self::NoSuchKey => "The specified key does not exist",
            Self::NoSuchUpload => "The specified multipart upload does not exist",
            Self::NoSuchVersion => "The specified version does not exist",
            Self::NotModified => "Not Modified",
            Self::ObjectNotInActiveTierError => {
                "The source object of the COPY operation is not in the active tier"
            }
            Self::PreconditionFailed => {
                "At least one of the preconditions you specified did not hold"
            }
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An S3 error with code, message and optional offending resource.
#[derive(Debug)]
pub struct S3Error {
    /// The error code.
    pub code: S3ErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The resource (bucket, key, metadata key, ...) that caused the error.
    pub resource: Option<String>,
    /// The request ID, when the error came from a service response.
    pub request_id: Option<String>,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for S3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S3Error({}): {}", self.code, self.message)
    }
}

impl std::error::Error for S3Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl S3Error {
    /// Create an error carrying the code's stock message and status.
    #[must_use]
    pub fn new(code: S3ErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.default_message().to_owned(),
            code,
            resource: None,
            request_id: None,
            source: None,
        }
    }

    /// Create an error with a custom message.
    #[must_use]
    pub fn with_message(code: S3ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            resource: None,
            request_id: None,
            source: None,
        }
    }

    /// Set the resource that caused this error.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create an InvalidArgument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::with_message(S3ErrorCode::InvalidArgument, message)
    }

    /// Error for inserting a metadata key that is already present.
    #[must_use]
    pub fn duplicate_metadata_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::with_message(
            S3ErrorCode::InvalidArgument,
            format!("Duplicated keys ({key}) are provided."),
        )
        .with_resource(key)
    }

    /// Create a NoSuchBucket error.
    #[must_use]
    pub fn no_such_bucket(bucket_name: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::NoSuchBucket).with_resource(bucket_name)
    }

    /// Create a NoSuchKey error.
    #[must_use]
    pub fn no_such_key(key: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::NoSuchKey).with_resource(key)
    }

    /// Create a NoSuchUpload error.
    #[must_use]
    pub fn no_such_upload(upload_id: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::NoSuchUpload).with_resource(upload_id)
    }

    /// Create an InternalError error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(S3ErrorCode::InternalError, message)
    }

    /// Create a PreconditionFailed error.
    #[must_use]
    pub fn precondition_failed(condition: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::PreconditionFailed).with_resource(condition)
    }

    /// Create an InvalidRange error.
    #[must_use]
    pub fn invalid_range(range: impl Into<String>) -> Self {
        Self::new(S3ErrorCode::InvalidRange).with_resource(range)
    }
}

/// Create an [`S3Error`] from an error code.
///
/// # Examples
///
/// ```
/// use s3_model::s3_error;
/// use s3_model::error::S3ErrorCode;
///
/// let err = s3_error!(NoSuchKey);
/// assert_eq!(err.code, S3ErrorCode::NoSuchKey);
///
/// let err = s3_error!(InvalidArgument, "bad part number");
/// assert_eq!(err.message, "bad part number");
/// ```
#[macro_export]
macro_rules! s3_error {
    ($code:ident) => {
        $crate::error::S3Error::new($crate::error::S3ErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::S3Error::with_message($crate::error::S3ErrorCode::$code, $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_codes_to_status() {
        assert_eq!(
            S3ErrorCode::InvalidArgument.default_status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            S3ErrorCode::NoSuchKey.default_status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            S3ErrorCode::NotModified.default_status_code(),
            http::StatusCode::NOT_MODIFIED
        );
        assert_eq!(
            S3ErrorCode::InvalidRange.default_status_code(),
            http::StatusCode::RANGE_NOT_SATISFIABLE
        );
    }

    #[test]
    fn test_should_name_offending_key_in_duplicate_metadata_error() {
        let err = S3Error::duplicate_metadata_key("x-owner");
        assert_eq!(err.code, S3ErrorCode::InvalidArgument);
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
        assert!(err.message.contains("x-owner"));
        assert_eq!(err.resource.as_deref(), Some("x-owner"));
    }

    #[test]
    fn test_should_display_code_and_message() {
        let err = S3Error::no_such_key("missing.txt");
        assert_eq!(
            err.to_string(),
            "S3Error(NoSuchKey): The specified key does not exist"
        );
    }

    #[test]
    fn test_should_build_errors_with_macro() {
        let err = s3_error!(NoSuchBucket);
        assert_eq!(err.code, S3ErrorCode::NoSuchBucket);
        let err = s3_error!(PreconditionFailed, "If-Match mismatch");
        assert_eq!(err.message, "If-Match mismatch");
    }
}
