//! Closed-value-set string fields of the object API, lifted into enums.
//!
//! The wire format is untyped text, so every enum keeps an `Unknown` variant
//! carrying the raw string for values the server knows and this client does
//! not yet. Conversion is total in both directions: `From<&str>` never fails
//! and `as_str` returns exactly what will go on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! wire_enum_impls {
    ($($name:ident),+ $(,)?) => {$(
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    )+};
}

/// Canned access control list applied to an object.
///
/// Allowed values: `private`, `public-read`, `public-read-write`,
/// `authenticated-read`, `aws-exec-read`, `bucket-owner-read`,
/// `bucket-owner-full-control`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectCannedAcl {
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
    AwsExecRead,
    BucketOwnerRead,
    BucketOwnerFullControl,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl ObjectCannedAcl {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Private => "private",
            Self::PublicRead => "public-read",
            Self::PublicReadWrite => "public-read-write",
            Self::AuthenticatedRead => "authenticated-read",
            Self::AwsExecRead => "aws-exec-read",
            Self::BucketOwnerRead => "bucket-owner-read",
            Self::BucketOwnerFullControl => "bucket-owner-full-control",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for ObjectCannedAcl {
    fn from(s: &str) -> Self {
        match s {
            "private" => Self::Private,
            "public-read" => Self::PublicRead,
            "public-read-write" => Self::PublicReadWrite,
            "authenticated-read" => Self::AuthenticatedRead,
            "aws-exec-read" => Self::AwsExecRead,
            "bucket-owner-read" => Self::BucketOwnerRead,
            "bucket-owner-full-control" => Self::BucketOwnerFullControl,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Server-side encryption algorithm.
///
/// Allowed values: `AES256`, `aws:kms`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServerSideEncryption {
    Aes256,
    AwsKms,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl ServerSideEncryption {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aes256 => "AES256",
            Self::AwsKms => "aws:kms",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for ServerSideEncryption {
    fn from(s: &str) -> Self {
        match s {
            "AES256" => Self::Aes256,
            "aws:kms" => Self::AwsKms,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Storage class of a stored, copied or uploaded object.
///
/// Allowed values: `STANDARD`, `REDUCED_REDUNDANCY`, `STANDARD_IA`,
/// `ONEZONE_IA`, `INTELLIGENT_TIERING`, `GLACIER`, `DEEP_ARCHIVE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorageClass {
    Standard,
    ReducedRedundancy,
    StandardIa,
    OnezoneIa,
    IntelligentTiering,
    Glacier,
    DeepArchive,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl StorageClass {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "STANDARD",
            Self::ReducedRedundancy => "REDUCED_REDUNDANCY",
            Self::StandardIa => "STANDARD_IA",
            Self::OnezoneIa => "ONEZONE_IA",
            Self::IntelligentTiering => "INTELLIGENT_TIERING",
            Self::Glacier => "GLACIER",
            Self::DeepArchive => "DEEP_ARCHIVE",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for StorageClass {
    fn from(s: &str) -> Self {
        match s {
            "STANDARD" => Self::Standard,
            "REDUCED_REDUNDANCY" => Self::ReducedRedundancy,
            "STANDARD_IA" => Self::StandardIa,
            "ONEZONE_IA" => Self::OnezoneIa,
            "INTELLIGENT_TIERING" => Self::IntelligentTiering,
            "GLACIER" => Self::Glacier,
            "DEEP_ARCHIVE" => Self::DeepArchive,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Whether object metadata is copied from the source or replaced.
///
/// Allowed values: `COPY`, `REPLACE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetadataDirective {
    Copy,
    Replace,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl MetadataDirective {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Copy => "COPY",
            Self::Replace => "REPLACE",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for MetadataDirective {
    fn from(s: &str) -> Self {
        match s {
            "COPY" => Self::Copy,
            "REPLACE" => Self::Replace,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Whether object tags are copied from the source or replaced.
///
/// Allowed values: `COPY`, `REPLACE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaggingDirective {
    Copy,
    Replace,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl TaggingDirective {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Copy => "COPY",
            Self::Replace => "REPLACE",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for TaggingDirective {
    fn from(s: &str) -> Self {
        match s {
            "COPY" => Self::Copy,
            "REPLACE" => Self::Replace,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Marker confirming the requester pays for the request.
///
/// Allowed values: `requester`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestPayer {
    Requester,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl RequestPayer {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Requester => "requester",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for RequestPayer {
    fn from(s: &str) -> Self {
        match s {
            "requester" => Self::Requester,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Response marker that the requester was billed for the request.
///
/// Allowed values: `requester`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestCharged {
    Requester,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl RequestCharged {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Requester => "requester",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for RequestCharged {
    fn from(s: &str) -> Self {
        match s {
            "requester" => Self::Requester,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Replication state of an object in a replication-enabled bucket.
///
/// Allowed values: `COMPLETE`, `PENDING`, `FAILED`, `REPLICA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReplicationStatus {
    Complete,
    Pending,
    Failed,
    Replica,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl ReplicationStatus {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Complete => "COMPLETE",
            Self::Pending => "PENDING",
            Self::Failed => "FAILED",
            Self::Replica => "REPLICA",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for ReplicationStatus {
    fn from(s: &str) -> Self {
        match s {
            "COMPLETE" => Self::Complete,
            "PENDING" => Self::Pending,
            "FAILED" => Self::Failed,
            "REPLICA" => Self::Replica,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Object-lock retention mode.
///
/// Allowed values: `GOVERNANCE`, `COMPLIANCE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectLockMode {
    Governance,
    Compliance,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl ObjectLockMode {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Governance => "GOVERNANCE",
            Self::Compliance => "COMPLIANCE",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for ObjectLockMode {
    fn from(s: &str) -> Self {
        match s {
            "GOVERNANCE" => Self::Governance,
            "COMPLIANCE" => Self::Compliance,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Legal-hold marker on an object.
///
/// Allowed values: `ON`, `OFF`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectLockLegalHoldStatus {
    On,
    Off,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl ObjectLockLegalHoldStatus {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for ObjectLockLegalHoldStatus {
    fn from(s: &str) -> Self {
        match s {
            "ON" => Self::On,
            "OFF" => Self::Off,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Output format of an inventory report.
///
/// Allowed values: `CSV`, `ORC`, `Parquet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InventoryFormat {
    Csv,
    Orc,
    Parquet,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl InventoryFormat {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Csv => "CSV",
            Self::Orc => "ORC",
            Self::Parquet => "Parquet",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for InventoryFormat {
    fn from(s: &str) -> Self {
        match s {
            "CSV" => Self::Csv,
            "ORC" => Self::Orc,
            "Parquet" => Self::Parquet,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// How often an inventory report is produced.
///
/// Allowed values: `Daily`, `Weekly`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InventoryFrequency {
    Daily,
    Weekly,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl InventoryFrequency {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for InventoryFrequency {
    fn from(s: &str) -> Self {
        match s {
            "Daily" => Self::Daily,
            "Weekly" => Self::Weekly,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Which object versions an inventory report covers.
///
/// Allowed values: `All`, `Current`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InventoryIncludedObjectVersions {
    All,
    Current,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl InventoryIncludedObjectVersions {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Current => "Current",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for InventoryIncludedObjectVersions {
    fn from(s: &str) -> Self {
        match s {
            "All" => Self::All,
            "Current" => Self::Current,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Optional per-object column included in an inventory report.
///
/// Allowed values: `Size`, `LastModifiedDate`, `StorageClass`, `ETag`,
/// `IsMultipartUploaded`, `ReplicationStatus`, `EncryptionStatus`,
/// `ObjectLockRetainUntilDate`, `ObjectLockMode`,
/// `ObjectLockLegalHoldStatus`, `IntelligentTieringAccessTier`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InventoryOptionalField {
    Size,
    LastModifiedDate,
    StorageClass,
    Etag,
    IsMultipartUploaded,
    ReplicationStatus,
    EncryptionStatus,
    ObjectLockRetainUntilDate,
    ObjectLockMode,
    ObjectLockLegalHoldStatus,
    IntelligentTieringAccessTier,
    /// A value not in the documented set; the raw wire string is kept.
    Unknown(String),
}

impl InventoryOptionalField {
    /// Returns the wire form of this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Size => "Size",
            Self::LastModifiedDate => "LastModifiedDate",
            Self::StorageClass => "StorageClass",
            Self::Etag => "ETag",
            Self::IsMultipartUploaded => "IsMultipartUploaded",
            Self::ReplicationStatus => "ReplicationStatus",
            Self::EncryptionStatus => "EncryptionStatus",
            Self::ObjectLockRetainUntilDate => "ObjectLockRetainUntilDate",
            Self::ObjectLockMode => "ObjectLockMode",
            Self::ObjectLockLegalHoldStatus => "ObjectLockLegalHoldStatus",
            Self::IntelligentTieringAccessTier => "IntelligentTieringAccessTier",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for InventoryOptionalField {
    fn from(s: &str) -> Self {
        match s {
            "Size" => Self::Size,
            "LastModifiedDate" => Self::LastModifiedDate,
            "StorageClass" => Self::StorageClass,
            "ETag" => Self::Etag,
            "IsMultipartUploaded" => Self::IsMultipartUploaded,
            "ReplicationStatus" => Self::ReplicationStatus,
            "EncryptionStatus" => Self::EncryptionStatus,
            "ObjectLockRetainUntilDate" => Self::ObjectLockRetainUntilDate,
            "ObjectLockMode" => Self::ObjectLockMode,
            "ObjectLockLegalHoldStatus" => Self::ObjectLockLegalHoldStatus,
            "IntelligentTieringAccessTier" => Self::IntelligentTieringAccessTier,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

wire_enum_impls!(
    ObjectCannedAcl,
    ServerSideEncryption,
    StorageClass,
    MetadataDirective,
    TaggingDirective,
    RequestPayer,
    RequestCharged,
    ReplicationStatus,
    ObjectLockMode,
    ObjectLockLegalHoldStatus,
    InventoryFormat,
    InventoryFrequency,
    InventoryIncludedObjectVersions,
    InventoryOptionalField,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_wire_form() {
        assert_eq!(StorageClass::StandardIa.to_string(), "STANDARD_IA");
        assert_eq!(ServerSideEncryption::AwsKms.to_string(), "aws:kms");
        assert_eq!(ObjectCannedAcl::BucketOwnerRead.to_string(), "bucket-owner-read");
        assert_eq!(ObjectLockLegalHoldStatus::Off.to_string(), "OFF");
        assert_eq!(InventoryOptionalField::Etag.to_string(), "ETag");
    }

    #[test]
    fn test_should_parse_wire_form() {
        assert_eq!(StorageClass::from("GLACIER"), StorageClass::Glacier);
        assert_eq!(MetadataDirective::from("REPLACE"), MetadataDirective::Replace);
        assert_eq!(RequestPayer::from("requester"), RequestPayer::Requester);
        assert_eq!(ReplicationStatus::from("REPLICA"), ReplicationStatus::Replica);
        assert_eq!(
            InventoryIncludedObjectVersions::from("Current"),
            InventoryIncludedObjectVersions::Current
        );
    }

    #[test]
    fn test_should_keep_raw_string_for_unrecognized_values() {
        let sc = StorageClass::from("EXPRESS_ONEZONE");
        assert_eq!(sc, StorageClass::Unknown("EXPRESS_ONEZONE".to_owned()));
        assert_eq!(sc.as_str(), "EXPRESS_ONEZONE");
        assert_eq!(sc.to_string(), "EXPRESS_ONEZONE");
    }

    #[test]
    fn test_should_serialize_as_wire_string() {
        let json = serde_json::to_string(&StorageClass::DeepArchive).expect("serialize");
        assert_eq!(json, r#""DEEP_ARCHIVE""#);
        let json = serde_json::to_string(&InventoryFormat::Parquet).expect("serialize");
        assert_eq!(json, r#""Parquet""#);
    }

    #[test]
    fn test_should_roundtrip_unknown_values_through_serde() {
        let parsed: ServerSideEncryption =
            serde_json::from_str(r#""aws:kms:dsse""#).expect("deserialize");
        assert_eq!(parsed, ServerSideEncryption::Unknown("aws:kms:dsse".to_owned()));
        let json = serde_json::to_string(&parsed).expect("serialize");
        assert_eq!(json, r#""aws:kms:dsse""#);
    }

    #[test]
    fn test_should_case_sensitively_match_wire_values() {
        assert_eq!(
            StorageClass::from("standard"),
            StorageClass::Unknown("standard".to_owned())
        );
        assert_eq!(
            RequestCharged::from("Requester"),
            RequestCharged::Unknown("Requester".to_owned())
        );
    }
}
