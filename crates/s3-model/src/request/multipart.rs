//! Multipart upload request records.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use crate::error::S3Error;
use crate::types::{
    ObjectCannedAcl, ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer,
    ServerSideEncryption, StorageClass,
};
use crate::util::{self, FieldList};

/// Request to start a multipart upload.
///
/// Carries everything the finished object will be stored with; the parts
/// themselves travel in separate upload-part requests that are out of scope
/// here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMultipartUploadRequest {
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedAcl>,
    /// HTTP label (URI path).
    pub bucket: Option<String>,
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
    /// HTTP header: `x-amz-grant-full-control`.
    pub grant_full_control: Option<String>,
    /// HTTP header: `x-amz-grant-read`.
    pub grant_read: Option<String>,
    /// HTTP header: `x-amz-grant-read-acp`.
    pub grant_read_acp: Option<String>,
    /// HTTP header: `x-amz-grant-write-acp`.
    pub grant_write_acp: Option<String>,
    /// HTTP label (URI path).
    pub key: Option<String>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: Option<HashMap<String, String>>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-storage-class`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-context`.
    pub ssekms_encryption_context: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP header: `x-amz-tagging`, URL-encoded `key=value` pairs.
    pub tagging: Option<String>,
    /// HTTP header: `x-amz-object-lock-mode`.
    pub object_lock_mode: Option<ObjectLockMode>,
    /// HTTP header: `x-amz-object-lock-retain-until-date`.
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-object-lock-legal-hold`.
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
}

impl CreateMultipartUploadRequest {
    /// Set the canned ACL for the finished object.
    #[must_use]
    pub fn with_acl(mut self, acl: ObjectCannedAcl) -> Self {
        self.acl = Some(acl);
        self
    }

    /// Set the bucket the upload targets.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the Cache-Control header stored with the object.
    #[must_use]
    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }

    /// Set the presentational Content-Disposition.
    #[must_use]
    pub fn with_content_disposition(mut self, content_disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(content_disposition.into());
        self
    }

    /// Set the content encodings applied to the object.
    #[must_use]
    pub fn with_content_encoding(mut self, content_encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(content_encoding.into());
        self
    }

    /// Set the language the content is in.
    #[must_use]
    pub fn with_content_language(mut self, content_language: impl Into<String>) -> Self {
        self.content_language = Some(content_language.into());
        self
    }

    /// Set the MIME type of the object data.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the time at which the object is no longer cacheable.
    #[must_use]
    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Grant full control to the named grantee.
    #[must_use]
    pub fn with_grant_full_control(mut self, grantee: impl Into<String>) -> Self {
        self.grant_full_control = Some(grantee.into());
        self
    }

    /// Grant read access to the named grantee.
    #[must_use]
    pub fn with_grant_read(mut self, grantee: impl Into<String>) -> Self {
        self.grant_read = Some(grantee.into());
        self
    }

    /// Grant ACL-read access to the named grantee.
    #[must_use]
    pub fn with_grant_read_acp(mut self, grantee: impl Into<String>) -> Self {
        self.grant_read_acp = Some(grantee.into());
        self
    }

    /// Grant ACL-write access to the named grantee.
    #[must_use]
    pub fn with_grant_write_acp(mut self, grantee: impl Into<String>) -> Self {
        self.grant_write_acp = Some(grantee.into());
        self
    }

    /// Set the key the upload targets.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Replace the whole user metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the server-side encryption algorithm.
    #[must_use]
    pub fn with_server_side_encryption(mut self, sse: ServerSideEncryption) -> Self {
        self.server_side_encryption = Some(sse);
        self
    }

    /// Set the storage class of the finished object.
    #[must_use]
    pub fn with_storage_class(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }

    /// Redirect website requests for this object to another location.
    #[must_use]
    pub fn with_website_redirect_location(mut self, location: impl Into<String>) -> Self {
        self.website_redirect_location = Some(location.into());
        self
    }

    /// Set the customer-provided encryption algorithm.
    #[must_use]
    pub fn with_sse_customer_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.sse_customer_algorithm = Some(algorithm.into());
        self
    }

    /// Set the customer-provided encryption key.
    #[must_use]
    pub fn with_sse_customer_key(mut self, key: impl Into<String>) -> Self {
        self.sse_customer_key = Some(key.into());
        self
    }

    /// Set the MD5 digest of the customer-provided key.
    #[must_use]
    pub fn with_sse_customer_key_md5(mut self, digest: impl Into<String>) -> Self {
        self.sse_customer_key_md5 = Some(digest.into());
        self
    }

    /// Set the KMS key ID used for the object.
    #[must_use]
    pub fn with_ssekms_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.ssekms_key_id = Some(key_id.into());
        self
    }

    /// Set the KMS encryption context.
    #[must_use]
    pub fn with_ssekms_encryption_context(mut self, context: impl Into<String>) -> Self {
        self.ssekms_encryption_context = Some(context.into());
        self
    }

    /// Confirm the requester pays for the request.
    #[must_use]
    pub fn with_request_payer(mut self, payer: RequestPayer) -> Self {
        self.request_payer = Some(payer);
        self
    }

    /// Set the tag set applied to the finished object.
    #[must_use]
    pub fn with_tagging(mut self, tagging: impl Into<String>) -> Self {
        self.tagging = Some(tagging.into());
        self
    }

    /// Set the object-lock mode.
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

    /// Set the legal-hold status.
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

impl fmt::Display for CreateMultipartUploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .opt("ACL", self.acl.as_ref())
            .opt("Bucket", self.bucket.as_ref())
            .opt("CacheControl", self.cache_control.as_ref())
            .opt("ContentDisposition", self.content_disposition.as_ref())
            .opt("ContentEncoding", self.content_encoding.as_ref())
            .opt("ContentLanguage", self.content_language.as_ref())
            .opt("ContentType", self.content_type.as_ref())
            .opt("Expires", self.expires.as_ref())
            .opt("GrantFullControl", self.grant_full_control.as_ref())
            .opt("GrantRead", self.grant_read.as_ref())
            .opt("GrantReadACP", self.grant_read_acp.as_ref())
            .opt("GrantWriteACP", self.grant_write_acp.as_ref())
            .opt("Key", self.key.as_ref())
            .map("Metadata", self.metadata.as_ref())
            .opt("ServerSideEncryption", self.server_side_encryption.as_ref())
            .opt("StorageClass", self.storage_class.as_ref())
            .opt(
                "WebsiteRedirectLocation",
                self.website_redirect_location.as_ref(),
            )
            .opt("SSECustomerAlgorithm", self.sse_customer_algorithm.as_ref())
            .opt("SSECustomerKey", self.sse_customer_key.as_ref())
            .opt("SSECustomerKeyMD5", self.sse_customer_key_md5.as_ref())
            .opt("SSEKMSKeyId", self.ssekms_key_id.as_ref())
            .opt(
                "SSEKMSEncryptionContext",
                self.ssekms_encryption_context.as_ref(),
            )
            .opt("RequestPayer", self.request_payer.as_ref())
            .opt("Tagging", self.tagging.as_ref())
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

impl Hash for CreateMultipartUploadRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.acl.hash(state);
        self.bucket.hash(state);
        self.cache_control.hash(state);
        self.content_disposition.hash(state);
        self.content_encoding.hash(state);
        self.content_language.hash(state);
        self.content_type.hash(state);
        self.expires.hash(state);
        self.grant_full_control.hash(state);
        self.grant_read.hash(state);
        self.grant_read_acp.hash(state);
        self.grant_write_acp.hash(state);
        self.key.hash(state);
        util::hash_metadata(&self.metadata, state);
        self.server_side_encryption.hash(state);
        self.storage_class.hash(state);
        self.website_redirect_location.hash(state);
        self.sse_customer_algorithm.hash(state);
        self.sse_customer_key.hash(state);
        self.sse_customer_key_md5.hash(state);
        self.ssekms_key_id.hash(state);
        self.ssekms_encryption_context.hash(state);
        self.request_payer.hash(state);
        self.tagging.hash(state);
        self.object_lock_mode.hash(state);
        self.object_lock_retain_until_date.hash(state);
        self.object_lock_legal_hold_status.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_chain_upload_settings() {
        let req = CreateMultipartUploadRequest::default()
            .with_bucket("media")
            .with_key("video.mp4")
            .with_content_type("video/mp4")
            .with_server_side_encryption(ServerSideEncryption::AwsKms)
            .with_ssekms_key_id("kms-key-1");
        assert_eq!(req.bucket.as_deref(), Some("media"));
        assert_eq!(req.content_type.as_deref(), Some("video/mp4"));
        assert_eq!(
            req.server_side_encryption,
            Some(ServerSideEncryption::AwsKms)
        );
        assert_eq!(req.ssekms_key_id.as_deref(), Some("kms-key-1"));
    }

    #[test]
    fn test_should_render_set_fields_only() {
        let req = CreateMultipartUploadRequest::default()
            .with_bucket("media")
            .with_key("video.mp4")
            .with_storage_class(StorageClass::IntelligentTiering);
        assert_eq!(
            req.to_string(),
            "{Bucket: media, Key: video.mp4, StorageClass: INTELLIGENT_TIERING}"
        );
    }

    #[test]
    fn test_should_reject_duplicate_metadata_key() {
        let mut req = CreateMultipartUploadRequest::default();
        req.add_metadata_entry("encoder", "x264").unwrap();
        assert!(req.add_metadata_entry("encoder", "av1").is_err());
        assert_eq!(
            req.metadata
                .as_ref()
                .and_then(|m| m.get("encoder"))
                .map(String::as_str),
            Some("x264")
        );
    }
}
