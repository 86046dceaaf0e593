//! Result records for object retrieval.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::error::S3Error;
use crate::types::{
    ObjectLockLegalHoldStatus, ObjectLockMode, ReplicationStatus, RequestCharged,
    ServerSideEncryption, StorageClass,
};
use crate::util::{self, FieldList};

/// Response to a get-object request.
///
/// The object data arrives in `body`; everything else is decoded from
/// response headers. Fields a server did not send stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectResult {
    /// HTTP payload: the object data.
    pub body: Option<Bytes>,
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `accept-ranges`.
    pub accept_ranges: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-restore`.
    pub restore: Option<String>,
    /// HTTP header: `Last-Modified`.
    pub last_modified: Option<DateTime<Utc>>,
    /// HTTP header: `Content-Length`.
    pub content_length: Option<i64>,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-missing-meta`.
    pub missing_meta: Option<i32>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
    /// HTTP header: `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// HTTP header: `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// HTTP header: `Content-Language`.
    pub content_language: Option<String>,
    /// HTTP header: `Content-Range`.
    pub content_range: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `Expires`.
    pub expires: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: Option<HashMap<String, String>>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-replication-status`.
    pub replication_status: Option<ReplicationStatus>,
    /// HTTP header: `x-amz-mp-parts-count`.
    pub parts_count: Option<i32>,
    /// HTTP header: `x-amz-tagging-count`.
    pub tag_count: Option<i32>,
    /// HTTP header: `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// HTTP header: `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
}

impl GetObjectResult {
    /// Set the object data.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Mark the returned version as a delete marker.
    #[must_use]
    pub fn with_delete_marker(mut self, delete_marker: bool) -> Self {
        self.delete_marker = Some(delete_marker);
        self
    }

    /// Set the range unit the object accepts.
    #[must_use]
    pub fn with_accept_ranges(mut self, accept_ranges: impl Into<String>) -> Self {
        self.accept_ranges = Some(accept_ranges.into());
        self
    }

    /// Set the lifecycle expiration details.
    #[must_use]
    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
        self
    }

    /// Set the archive-restore progress line.
    #[must_use]
    pub fn with_restore(mut self, restore: impl Into<String>) -> Self {
        self.restore = Some(restore.into());
        self
    }

    /// Set when the object was last modified.
    #[must_use]
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Set the body size in bytes.
    #[must_use]
    pub fn with_content_length(mut self, content_length: i64) -> Self {
        self.content_length = Some(content_length);
        self
    }

    /// Set the object's entity tag.
    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    /// Set how many metadata entries could not be returned as headers.
    #[must_use]
    pub fn with_missing_meta(mut self, missing_meta: i32) -> Self {
        self.missing_meta = Some(missing_meta);
        self
    }

    /// Set the version of the object that was returned.
    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    /// Set the stored Cache-Control header.
    #[must_use]
    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }

    /// Set the stored Content-Disposition header.
    #[must_use]
    pub fn with_content_disposition(mut self, content_disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(content_disposition.into());
        self
    }

    /// Set the stored Content-Encoding header.
    #[must_use]
    pub fn with_content_encoding(mut self, content_encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(content_encoding.into());
        self
    }

    /// Set the stored Content-Language header.
    #[must_use]
    pub fn with_content_language(mut self, content_language: impl Into<String>) -> Self {
        self.content_language = Some(content_language.into());
        self
    }

    /// Set the range actually returned for a partial read.
    #[must_use]
    pub fn with_content_range(mut self, content_range: impl Into<String>) -> Self {
        self.content_range = Some(content_range.into());
        self
    }

    /// Set the stored MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set when the object stops being cacheable.
    #[must_use]
    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Set the stored website redirect location.
    #[must_use]
    pub fn with_website_redirect_location(mut self, location: impl Into<String>) -> Self {
        self.website_redirect_location = Some(location.into());
        self
    }

    /// Set the server-side encryption algorithm used.
    #[must_use]
    pub fn with_server_side_encryption(mut self, sse: ServerSideEncryption) -> Self {
        self.server_side_encryption = Some(sse);
        self
    }

    /// Replace the whole user metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the customer-provided encryption algorithm that was used.
    #[must_use]
    pub fn with_sse_customer_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.sse_customer_algorithm = Some(algorithm.into());
        self
    }

    /// Set the MD5 digest of the customer-provided key that was used.
    #[must_use]
    pub fn with_sse_customer_key_md5(mut self, digest: impl Into<String>) -> Self {
        self.sse_customer_key_md5 = Some(digest.into());
        self
    }

    /// Set the KMS key ID that protected the object.
    #[must_use]
    pub fn with_ssekms_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.ssekms_key_id = Some(key_id.into());
        self
    }

    /// Set the storage class the object lives in.
    #[must_use]
    pub fn with_storage_class(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }

    /// Record that the requester was charged.
    #[must_use]
    pub fn with_request_charged(mut self, charged: RequestCharged) -> Self {
        self.request_charged = Some(charged);
        self
    }

    /// Set the cross-region replication status.
    #[must_use]
    pub fn with_replication_status(mut self, status: ReplicationStatus) -> Self {
        self.replication_status = Some(status);
        self
    }

    /// Set the number of parts the object was uploaded in.
    #[must_use]
    pub fn with_parts_count(mut self, parts_count: i32) -> Self {
        self.parts_count = Some(parts_count);
        self
    }

    /// Set the number of tags on the object.
    #[must_use]
    pub fn with_tag_count(mut self, tag_count: i32) -> Self {
        self.tag_count = Some(tag_count);
        self
    }

    /// Set the object-lock mode in effect.
    #[must_use]
    pub fn with_object_lock_mode(mut self, mode: ObjectLockMode) -> Self {
        self.object_lock_mode = Some(mode);
        self
    }

    /// Set when the object-lock retention expires.
    #[must_use]
    pub fn with_object_lock_retain_until_date(mut self, when: DateTime<Utc>) -> Self {
        self.object_lock_retain_until_date = Some(when);
        self
    }

    /// Set the legal-hold status in effect.
    #[must_use]
    pub fn with_object_lock_legal_hold_status(
        mut self,
        status: ObjectLockLegalHoldStatus,
    ) -> Self {
        self.object_lock_legal_hold_status = Some(status);
        self
    }

    /// Insert a single metadata entry, failing if the key is already set.
    pub fn add_metadata_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), S3Error> {
        util::insert_metadata_entry(&mut self.metadata, key.into(), value.into())
    }

    /// Reset the metadata map to unset.
    pub fn clear_metadata_entries(&mut self) {
        self.metadata = None;
    }
}

impl fmt::Display for GetObjectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .bytes("Body", self.body.as_ref())
            .opt("DeleteMarker", self.delete_marker.as_ref())
            .opt("AcceptRanges", self.accept_ranges.as_ref())
            .opt("Expiration", self.expiration.as_ref())
            .opt("Restore", self.restore.as_ref())
            .opt("LastModified", self.last_modified.as_ref())
            .opt("ContentLength", self.content_length.as_ref())
            .opt("ETag", self.e_tag.as_ref())
            .opt("MissingMeta", self.missing_meta.as_ref())
            .opt("VersionId", self.version_id.as_ref())
            .opt("CacheControl", self.cache_control.as_ref())
            .opt("ContentDisposition", self.content_disposition.as_ref())
            .opt("ContentEncoding", self.content_encoding.as_ref())
            .opt("ContentLanguage", self.content_language.as_ref())
            .opt("ContentRange", self.content_range.as_ref())
            .opt("ContentType", self.content_type.as_ref())
            .opt("Expires", self.expires.as_ref())
            .opt(
                "WebsiteRedirectLocation",
                self.website_redirect_location.as_ref(),
            )
            .opt("ServerSideEncryption", self.server_side_encryption.as_ref())
            .map("Metadata", self.metadata.as_ref())
            .opt("SSECustomerAlgorithm", self.sse_customer_algorithm.as_ref())
            .opt("SSECustomerKeyMD5", self.sse_customer_key_md5.as_ref())
            .opt("SSEKMSKeyId", self.ssekms_key_id.as_ref())
            .opt("StorageClass", self.storage_class.as_ref())
            .opt("RequestCharged", self.request_charged.as_ref())
            .opt("ReplicationStatus", self.replication_status.as_ref())
            .opt("PartsCount", self.parts_count.as_ref())
            .opt("TagCount", self.tag_count.as_ref())
            .opt("ObjectLockMode", self.object_lock_mode.as_ref())
            .opt(
                "ObjectLockRetainUntilDate",
                self.object_lock_retain_until_date.as_ref(),
            )
            .opt(
                "ObjectLockLegalHoldStatus",
                self.object_lock_legal_hold_status.as_ref(),
            )
            .finish()
    }
}

impl Hash for GetObjectResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.body.hash(state);
        self.delete_marker.hash(state);
        self.accept_ranges.hash(state);
        self.expiration.hash(state);
        self.restore.hash(state);
        self.last_modified.hash(state);
        self.content_length.hash(state);
        self.e_tag.hash(state);
        self.missing_meta.hash(state);
        self.version_id.hash(state);
        self.cache_control.hash(state);
        self.content_disposition.hash(state);
        self.content_encoding.hash(state);
        self.content_language.hash(state);
        self.content_range.hash(state);
        self.content_type.hash(state);
        self.expires.hash(state);
        self.website_redirect_location.hash(state);
        self.server_side_encryption.hash(state);
        util::hash_metadata(&self.metadata, state);
        self.sse_customer_algorithm.hash(state);
        self.sse_customer_key_md5.hash(state);
        self.ssekms_key_id.hash(state);
        self.storage_class.hash(state);
        self.request_charged.hash(state);
        self.replication_status.hash(state);
        self.parts_count.hash(state);
        self.tag_count.hash(state);
        self.object_lock_mode.hash(state);
        self.object_lock_retain_until_date.hash(state);
        self.object_lock_legal_hold_status.hash(state);
    }
}

/// Response to a head-object request.
///
/// Mirrors [`GetObjectResult`] without the payload fields; the server sends
/// headers only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadObjectResult {
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `accept-ranges`.
    pub accept_ranges: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-restore`.
    pub restore: Option<String>,
    /// HTTP header: `Last-Modified`.
    pub last_modified: Option<DateTime<Utc>>,
    /// HTTP header: `Content-Length`.
    pub content_length: Option<i64>,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-missing-meta`.
    pub missing_meta: Option<i32>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
    /// HTTP header: `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// HTTP header: `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// HTTP header: `Content-Language`.
    pub content_language: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `Expires`.
    pub expires: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: Option<HashMap<String, String>>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-replication-status`.
    pub replication_status: Option<ReplicationStatus>,
    /// HTTP header: `x-amz-mp-parts-count`.
    pub parts_count: Option<i32>,
    /// HTTP header: `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// HTTP header: `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
}

impl HeadObjectResult {
    /// Mark the returned version as a delete marker.
    #[must_use]
    pub fn with_delete_marker(mut self, delete_marker: bool) -> Self {
        self.delete_marker = Some(delete_marker);
        self
    }

    /// Set the range unit the object accepts.
    #[must_use]
    pub fn with_accept_ranges(mut self, accept_ranges: impl Into<String>) -> Self {
        self.accept_ranges = Some(accept_ranges.into());
        self
    }

    /// Set the lifecycle expiration details.
    #[must_use]
    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
        self
    }

    /// Set the archive-restore progress line.
    #[must_use]
    pub fn with_restore(mut self, restore: impl Into<String>) -> Self {
        self.restore = Some(restore.into());
        self
    }

    /// Set when the object was last modified.
    #[must_use]
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Set the object size in bytes.
    #[must_use]
    pub fn with_content_length(mut self, content_length: i64) -> Self {
        self.content_length = Some(content_length);
        self
    }

    /// Set the object's entity tag.
    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    /// Set how many metadata entries could not be returned as headers.
    #[must_use]
    pub fn with_missing_meta(mut self, missing_meta: i32) -> Self {
        self.missing_meta = Some(missing_meta);
        self
    }

    /// Set the version of the object that was described.
    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    /// Set the stored Cache-Control header.
    #[must_use]
    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }

    /// Set the stored Content-Disposition header.
    #[must_use]
    pub fn with_content_disposition(mut self, content_disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(content_disposition.into());
        self
    }

    /// Set the stored Content-Encoding header.
    #[must_use]
    pub fn with_content_encoding(mut self, content_encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(content_encoding.into());
        self
    }

    /// Set the stored Content-Language header.
    #[must_use]
    pub fn with_content_language(mut self, content_language: impl Into<String>) -> Self {
        self.content_language = Some(content_language.into());
        self
    }

    /// Set the stored MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set when the object stops being cacheable.
    #[must_use]
    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Set the stored website redirect location.
    #[must_use]
    pub fn with_website_redirect_location(mut self, location: impl Into<String>) -> Self {
        self.website_redirect_location = Some(location.into());
        self
    }

    /// Set the server-side encryption algorithm used.
    #[must_use]
    pub fn with_server_side_encryption(mut self, sse: ServerSideEncryption) -> Self {
        self.server_side_encryption = Some(sse);
        self
    }

    /// Replace the whole user metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the customer-provided encryption algorithm that was used.
    #[must_use]
    pub fn with_sse_customer_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.sse_customer_algorithm = Some(algorithm.into());
        self
    }

    /// Set the MD5 digest of the customer-provided key that was used.
    #[must_use]
    pub fn with_sse_customer_key_md5(mut self, digest: impl Into<String>) -> Self {
        self.sse_customer_key_md5 = Some(digest.into());
        self
    }

    /// Set the KMS key ID that protected the object.
    #[must_use]
    pub fn with_ssekms_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.ssekms_key_id = Some(key_id.into());
        self
    }

    /// Set the storage class the object lives in.
    #[must_use]
    pub fn with_storage_class(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }

    /// Record that the requester was charged.
    #[must_use]
    pub fn with_request_charged(mut self, charged: RequestCharged) -> Self {
        self.request_charged = Some(charged);
        self
    }

    /// Set the cross-region replication status.
    #[must_use]
    pub fn with_replication_status(mut self, status: ReplicationStatus) -> Self {
        self.replication_status = Some(status);
        self
    }

    /// Set the number of parts the object was uploaded in.
    #[must_use]
    pub fn with_parts_count(mut self, parts_count: i32) -> Self {
        self.parts_count = Some(parts_count);
        self
    }

    /// Set the object-lock mode in effect.
    #[must_use]
    pub fn with_object_lock_mode(mut self, mode: ObjectLockMode) -> Self {
        self.object_lock_mode = Some(mode);
        self
    }

    /// Set when the object-lock retention expires.
    #[must_use]
    pub fn with_object_lock_retain_until_date(mut self, when: DateTime<Utc>) -> Self {
        self.object_lock_retain_until_date = Some(when);
        self
    }

    /// Set the legal-hold status in effect.
    #[must_use]
    pub fn with_object_lock_legal_hold_status(
        mut self,
        status: ObjectLockLegalHoldStatus,
    ) -> Self {
        self.object_lock_legal_hold_status = Some(status);
        self
    }

    /// Insert a single metadata entry, failing if the key is already set.
    pub fn add_metadata_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), S3Error> {
        util::insert_metadata_entry(&mut self.metadata, key.into(), value.into())
    }

    /// Reset the metadata map to unset.
    pub fn clear_metadata_entries(&mut self) {
        self.metadata = None;
    }
}

impl fmt::Display for HeadObjectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .opt("DeleteMarker", self.delete_marker.as_ref())
            .opt("AcceptRanges", self.accept_ranges.as_ref())
            .opt("Expiration", self.expiration.as_ref())
            .opt("Restore", self.restore.as_ref())
            .opt("LastModified", self.last_modified.as_ref())
            .opt("ContentLength", self.content_length.as_ref())
            .opt("ETag", self.e_tag.as_ref())
            .opt("MissingMeta", self.missing_meta.as_ref())
            .opt("VersionId", self.version_id.as_ref())
            .opt("CacheControl", self.cache_control.as_ref())
            .opt("ContentDisposition", self.content_disposition.as_ref())
            .opt("ContentEncoding", self.content_encoding.as_ref())
            .opt("ContentLanguage", self.content_language.as_ref())
            .opt("ContentType", self.content_type.as_ref())
            .opt("Expires", self.expires.as_ref())
            .opt(
                "WebsiteRedirectLocation",
                self.website_redirect_location.as_ref(),
            )
            .opt("ServerSideEncryption", self.server_side_encryption.as_ref())
            .map("Metadata", self.metadata.as_ref())
            .opt("SSECustomerAlgorithm", self.sse_customer_algorithm.as_ref())
            .opt("SSECustomerKeyMD5", self.sse_customer_key_md5.as_ref())
            .opt("SSEKMSKeyId", self.ssekms_key_id.as_ref())
            .opt("StorageClass", self.storage_class.as_ref())
            .opt("RequestCharged", self.request_charged.as_ref())
            .opt("ReplicationStatus", self.replication_status.as_ref())
            .opt("PartsCount", self.parts_count.as_ref())
            .opt("ObjectLockMode", self.object_lock_mode.as_ref())
            .opt(
                "ObjectLockRetainUntilDate",
                self.object_lock_retain_until_date.as_ref(),
            )
            .opt(
                "ObjectLockLegalHoldStatus",
                self.object_lock_legal_hold_status.as_ref(),
            )
            .finish()
    }
}

impl Hash for HeadObjectResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.delete_marker.hash(state);
        self.accept_ranges.hash(state);
        self.expiration.hash(state);
        self.restore.hash(state);
        self.last_modified.hash(state);
        self.content_length.hash(state);
        self.e_tag.hash(state);
        self.missing_meta.hash(state);
        self.version_id.hash(state);
        self.cache_control.hash(state);
        self.content_disposition.hash(state);
        self.content_encoding.hash(state);
        self.content_language.hash(state);
        self.content_type.hash(state);
        self.expires.hash(state);
        self.website_redirect_location.hash(state);
        self.server_side_encryption.hash(state);
        util::hash_metadata(&self.metadata, state);
        self.sse_customer_algorithm.hash(state);
        self.sse_customer_key_md5.hash(state);
        self.ssekms_key_id.hash(state);
        self.storage_class.hash(state);
        self.request_charged.hash(state);
        self.replication_status.hash(state);
        self.parts_count.hash(state);
        self.object_lock_mode.hash(state);
        self.object_lock_retain_until_date.hash(state);
        self.object_lock_legal_hold_status.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hasher as _};

    use chrono::TimeZone;

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // -------------------------------------------------------------------
    // GetObjectResult
    // -------------------------------------------------------------------

    #[test]
    fn test_should_carry_body_and_headers() {
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let res = GetObjectResult::default()
            .with_body(&b"payload"[..])
            .with_content_length(7)
            .with_e_tag("\"abc123\"")
            .with_last_modified(when)
            .with_request_charged(RequestCharged::Requester);
        assert_eq!(res.body.as_deref(), Some(&b"payload"[..]));
        assert_eq!(res.content_length, Some(7));
        assert_eq!(res.e_tag.as_deref(), Some("\"abc123\""));
        assert_eq!(res.last_modified, Some(when));
        assert_eq!(res.request_charged, Some(RequestCharged::Requester));
    }

    #[test]
    fn test_should_render_body_as_byte_count() {
        let res = GetObjectResult::default()
            .with_body(&b"payload"[..])
            .with_e_tag("\"abc123\"");
        assert_eq!(res.to_string(), "{Body: <7 bytes>, ETag: \"abc123\"}");
    }

    #[test]
    fn test_should_equate_independently_built_results() {
        let a = GetObjectResult::default()
            .with_version_id("v1")
            .with_storage_class(StorageClass::Glacier)
            .with_replication_status(ReplicationStatus::Replica);
        let b = GetObjectResult::default()
            .with_version_id("v1")
            .with_storage_class(StorageClass::Glacier)
            .with_replication_status(ReplicationStatus::Replica);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_should_distinguish_unset_body_from_empty_body() {
        let unset = GetObjectResult::default();
        let empty = GetObjectResult::default().with_body(Bytes::new());
        assert_ne!(unset, empty);
    }

    #[test]
    fn test_should_hash_metadata_regardless_of_insertion_order() {
        let mut a = GetObjectResult::default();
        a.add_metadata_entry("alpha", "1").unwrap();
        a.add_metadata_entry("beta", "2").unwrap();
        let mut b = GetObjectResult::default();
        b.add_metadata_entry("beta", "2").unwrap();
        b.add_metadata_entry("alpha", "1").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    // -------------------------------------------------------------------
    // HeadObjectResult
    // -------------------------------------------------------------------

    #[test]
    fn test_should_describe_object_without_payload() {
        let res = HeadObjectResult::default()
            .with_content_length(1024)
            .with_content_type("application/json")
            .with_delete_marker(false)
            .with_parts_count(2);
        assert_eq!(res.content_length, Some(1024));
        assert_eq!(res.delete_marker, Some(false));
        assert_eq!(
            res.to_string(),
            "{DeleteMarker: false, ContentLength: 1024, \
             ContentType: application/json, PartsCount: 2}"
        );
    }

    #[test]
    fn test_should_reject_duplicate_metadata_key() {
        let mut res = HeadObjectResult::default();
        res.add_metadata_entry("origin", "sfo").unwrap();
        let err = res.add_metadata_entry("origin", "nyc").unwrap_err();
        assert!(err.to_string().contains("origin"));
    }

    #[test]
    fn test_should_render_empty_result_as_empty_braces() {
        assert_eq!(HeadObjectResult::default().to_string(), "{}");
    }
}
