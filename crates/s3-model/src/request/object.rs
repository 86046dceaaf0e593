//! Single-object request records: copy, get and put.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::error::S3Error;
use crate::types::{
    MetadataDirective, ObjectCannedAcl, ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer,
    ServerSideEncryption, StorageClass, TaggingDirective,
};
use crate::util::{self, FieldList};

/// Request to copy an object that is already stored.
///
/// Every field is optional; the transport layer decides which combination a
/// given call requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyObjectRequest {
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedAcl>,
    /// HTTP label (URI path): destination bucket.
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
    /// HTTP header: `x-amz-copy-source`.
    pub copy_source: Option<String>,
    /// HTTP header: `x-amz-copy-source-if-match`.
    pub copy_source_if_match: Option<String>,
    /// HTTP header: `x-amz-copy-source-if-modified-since`.
    pub copy_source_if_modified_since: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-copy-source-if-none-match`.
    pub copy_source_if_none_match: Option<String>,
    /// HTTP header: `x-amz-copy-source-if-unmodified-since`.
    pub copy_source_if_unmodified_since: Option<DateTime<Utc>>,
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
    /// HTTP label (URI path): destination key.
    pub key: Option<String>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: Option<HashMap<String, String>>,
    /// HTTP header: `x-amz-metadata-directive`.
    pub metadata_directive: Option<MetadataDirective>,
    /// HTTP header: `x-amz-tagging-directive`.
    pub tagging_directive: Option<TaggingDirective>,
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
    /// HTTP header: `x-amz-copy-source-server-side-encryption-customer-algorithm`.
    pub copy_source_sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-copy-source-server-side-encryption-customer-key`.
    pub copy_source_sse_customer_key: Option<String>,
    /// HTTP header: `x-amz-copy-source-server-side-encryption-customer-key-MD5`.
    pub copy_source_sse_customer_key_md5: Option<String>,
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

impl CopyObjectRequest {
    /// Set the canned ACL for the copied object.
    #[must_use]
    pub fn with_acl(mut self, acl: ObjectCannedAcl) -> Self {
        self.acl = Some(acl);
        self
    }

    /// Set the destination bucket.
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

    /// Set the source bucket and key, `/{bucket}/{key}` with an optional
    /// `?versionId=` suffix.
    #[must_use]
    pub fn with_copy_source(mut self, copy_source: impl Into<String>) -> Self {
        self.copy_source = Some(copy_source.into());
        self
    }

    /// Copy only if the source entity tag matches.
    #[must_use]
    pub fn with_copy_source_if_match(mut self, etag: impl Into<String>) -> Self {
        self.copy_source_if_match = Some(etag.into());
        self
    }

    /// Copy only if the source was modified since the given time.
    #[must_use]
    pub fn with_copy_source_if_modified_since(mut self, when: DateTime<Utc>) -> Self {
        self.copy_source_if_modified_since = Some(when);
        self
    }

    /// Copy only if the source entity tag differs.
    #[must_use]
    pub fn with_copy_source_if_none_match(mut self, etag: impl Into<String>) -> Self {
        self.copy_source_if_none_match = Some(etag.into());
        self
    }

    /// Copy only if the source is unmodified since the given time.
    #[must_use]
    pub fn with_copy_source_if_unmodified_since(mut self, when: DateTime<Utc>) -> Self {
        self.copy_source_if_unmodified_since = Some(when);
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

    /// Set the destination key.
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

    /// Choose whether metadata is copied from the source or replaced.
    #[must_use]
    pub fn with_metadata_directive(mut self, directive: MetadataDirective) -> Self {
        self.metadata_directive = Some(directive);
        self
    }

    /// Choose whether tags are copied from the source or replaced.
    #[must_use]
    pub fn with_tagging_directive(mut self, directive: TaggingDirective) -> Self {
        self.tagging_directive = Some(directive);
        self
    }

    /// Set the server-side encryption algorithm.
    #[must_use]
    pub fn with_server_side_encryption(mut self, sse: ServerSideEncryption) -> Self {
        self.server_side_encryption = Some(sse);
        self
    }

    /// Set the storage class of the copy.
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

    /// Set the customer-provided encryption algorithm for the destination.
    #[must_use]
    pub fn with_sse_customer_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.sse_customer_algorithm = Some(algorithm.into());
        self
    }

    /// Set the customer-provided encryption key for the destination.
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

    /// Set the KMS key ID used for the destination object.
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

    /// Set the encryption algorithm the source was stored with.
    #[must_use]
    pub fn with_copy_source_sse_customer_algorithm(
        mut self,
        algorithm: impl Into<String>,
    ) -> Self {
        self.copy_source_sse_customer_algorithm = Some(algorithm.into());
        self
    }

    /// Set the customer key needed to decrypt the source.
    #[must_use]
    pub fn with_copy_source_sse_customer_key(mut self, key: impl Into<String>) -> Self {
        self.copy_source_sse_customer_key = Some(key.into());
        self
    }

    /// Set the MD5 digest of the source decryption key.
    #[must_use]
    pub fn with_copy_source_sse_customer_key_md5(mut self, digest: impl Into<String>) -> Self {
        self.copy_source_sse_customer_key_md5 = Some(digest.into());
        self
    }

    /// Confirm the requester pays for the request.
    #[must_use]
    pub fn with_request_payer(mut self, payer: RequestPayer) -> Self {
        self.request_payer = Some(payer);
        self
    }

    /// Set the tag set applied to the copy.
    #[must_use]
    pub fn with_tagging(mut self, tagging: impl Into<String>) -> Self {
        self.tagging = Some(tagging.into());
        self
    }

    /// Set the object-lock mode for the copy.
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

    /// Set the legal-hold status for the copy.
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

impl fmt::Display for CopyObjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .opt("ACL", self.acl.as_ref())
            .opt("Bucket", self.bucket.as_ref())
            .opt("CacheControl", self.cache_control.as_ref())
            .opt("ContentDisposition", self.content_disposition.as_ref())
            .opt("ContentEncoding", self.content_encoding.as_ref())
            .opt("ContentLanguage", self.content_language.as_ref())
            .opt("ContentType", self.content_type.as_ref())
            .opt("CopySource", self.copy_source.as_ref())
            .opt("CopySourceIfMatch", self.copy_source_if_match.as_ref())
            .opt(
                "CopySourceIfModifiedSince",
                self.copy_source_if_modified_since.as_ref(),
            )
            .opt("CopySourceIfNoneMatch", self.copy_source_if_none_match.as_ref())
            .opt(
                "CopySourceIfUnmodifiedSince",
                self.copy_source_if_unmodified_since.as_ref(),
            )
            .opt("Expires", self.expires.as_ref())
            .opt("GrantFullControl", self.grant_full_control.as_ref())
            .opt("GrantRead", self.grant_read.as_ref())
            .opt("GrantReadACP", self.grant_read_acp.as_ref())
            .opt("GrantWriteACP", self.grant_write_acp.as_ref())
            .opt("Key", self.key.as_ref())
            .map("Metadata", self.metadata.as_ref())
            .opt("MetadataDirective", self.metadata_directive.as_ref())
            .opt("TaggingDirective", self.tagging_directive.as_ref())
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
            .opt(
                "CopySourceSSECustomerAlgorithm",
                self.copy_source_sse_customer_algorithm.as_ref(),
            )
            .opt(
                "CopySourceSSECustomerKey",
                self.copy_source_sse_customer_key.as_ref(),
            )
            .opt(
                "CopySourceSSECustomerKeyMD5",
                self.copy_source_sse_customer_key_md5.as_ref(),
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

impl Hash for CopyObjectRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.acl.hash(state);
        self.bucket.hash(state);
        self.cache_control.hash(state);
        self.content_disposition.hash(state);
        self.content_encoding.hash(state);
        self.content_language.hash(state);
        self.content_type.hash(state);
        self.copy_source.hash(state);
        self.copy_source_if_match.hash(state);
        self.copy_source_if_modified_since.hash(state);
        self.copy_source_if_none_match.hash(state);
        self.copy_source_if_unmodified_since.hash(state);
        self.expires.hash(state);
        self.grant_full_control.hash(state);
        self.grant_read.hash(state);
        self.grant_read_acp.hash(state);
        self.grant_write_acp.hash(state);
        self.key.hash(state);
        util::hash_metadata(&self.metadata, state);
        self.metadata_directive.hash(state);
        self.tagging_directive.hash(state);
        self.server_side_encryption.hash(state);
        self.storage_class.hash(state);
        self.website_redirect_location.hash(state);
        self.sse_customer_algorithm.hash(state);
        self.sse_customer_key.hash(state);
        self.sse_customer_key_md5.hash(state);
        self.ssekms_key_id.hash(state);
        self.ssekms_encryption_context.hash(state);
        self.copy_source_sse_customer_algorithm.hash(state);
        self.copy_source_sse_customer_key.hash(state);
        self.copy_source_sse_customer_key_md5.hash(state);
        self.request_payer.hash(state);
        self.tagging.hash(state);
        self.object_lock_mode.hash(state);
        self.object_lock_retain_until_date.hash(state);
        self.object_lock_legal_hold_status.hash(state);
    }
}

/// Request to retrieve an object's data and properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GetObjectRequest {
    /// HTTP label (URI path).
    pub bucket: Option<String>,
    /// HTTP header: `If-Match`.
    pub if_match: Option<String>,
    /// HTTP header: `If-Modified-Since`.
    pub if_modified_since: Option<DateTime<Utc>>,
    /// HTTP header: `If-None-Match`.
    pub if_none_match: Option<String>,
    /// HTTP header: `If-Unmodified-Since`.
    pub if_unmodified_since: Option<DateTime<Utc>>,
    /// HTTP label (URI path).
    pub key: Option<String>,
    /// HTTP header: `Range`.
    pub range: Option<String>,
    /// HTTP query: `response-cache-control`.
    pub response_cache_control: Option<String>,
    /// HTTP query: `response-content-disposition`.
    pub response_content_disposition: Option<String>,
    /// HTTP query: `response-content-encoding`.
    pub response_content_encoding: Option<String>,
    /// HTTP query: `response-content-language`.
    pub response_content_language: Option<String>,
    /// HTTP query: `response-content-type`.
    pub response_content_type: Option<String>,
    /// HTTP query: `response-expires`.
    pub response_expires: Option<DateTime<Utc>>,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    pub sse_customer_algorithm: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key`.
    pub sse_customer_key: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    pub sse_customer_key_md5: Option<String>,
    /// HTTP header: `x-amz-request-payer`.
    pub request_payer: Option<RequestPayer>,
    /// HTTP query: `partNumber`.
    pub part_number: Option<i32>,
}

impl GetObjectRequest {
    /// Set the bucket to read from.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Return the object only if its entity tag matches.
    #[must_use]
    pub fn with_if_match(mut self, etag: impl Into<String>) -> Self {
        self.if_match = Some(etag.into());
        self
    }

    /// Return the object only if modified since the given time.
    #[must_use]
    pub fn with_if_modified_since(mut self, when: DateTime<Utc>) -> Self {
        self.if_modified_since = Some(when);
        self
    }

    /// Return the object only if its entity tag differs.
    #[must_use]
    pub fn with_if_none_match(mut self, etag: impl Into<String>) -> Self {
        self.if_none_match = Some(etag.into());
        self
    }

    /// Return the object only if unmodified since the given time.
    #[must_use]
    pub fn with_if_unmodified_since(mut self, when: DateTime<Utc>) -> Self {
        self.if_unmodified_since = Some(when);
        self
    }

    /// Set the key to read.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Download only the given byte range, `bytes=first-last`.
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Override the Cache-Control header of the response.
    #[must_use]
    pub fn with_response_cache_control(mut self, value: impl Into<String>) -> Self {
        self.response_cache_control = Some(value.into());
        self
    }

    /// Override the Content-Disposition header of the response.
    #[must_use]
    pub fn with_response_content_disposition(mut self, value: impl Into<String>) -> Self {
        self.response_content_disposition = Some(value.into());
        self
    }

    /// Override the Content-Encoding header of the response.
    #[must_use]
    pub fn with_response_content_encoding(mut self, value: impl Into<String>) -> Self {
        self.response_content_encoding = Some(value.into());
        self
    }

    /// Override the Content-Language header of the response.
    #[must_use]
    pub fn with_response_content_language(mut self, value: impl Into<String>) -> Self {
        self.response_content_language = Some(value.into());
        self
    }

    /// Override the Content-Type header of the response.
    #[must_use]
    pub fn with_response_content_type(mut self, value: impl Into<String>) -> Self {
        self.response_content_type = Some(value.into());
        self
    }

    /// Override the Expires header of the response.
    #[must_use]
    pub fn with_response_expires(mut self, when: DateTime<Utc>) -> Self {
        self.response_expires = Some(when);
        self
    }

    /// Read a specific version of the object.
    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
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

    /// Confirm the requester pays for the request.
    #[must_use]
    pub fn with_request_payer(mut self, payer: RequestPayer) -> Self {
        self.request_payer = Some(payer);
        self
    }

    /// Read a single part of a multipart object, 1-based.
    #[must_use]
    pub fn with_part_number(mut self, part_number: i32) -> Self {
        self.part_number = Some(part_number);
        self
    }
}

impl fmt::Display for GetObjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .opt("Bucket", self.bucket.as_ref())
            .opt("IfMatch", self.if_match.as_ref())
            .opt("IfModifiedSince", self.if_modified_since.as_ref())
            .opt("IfNoneMatch", self.if_none_match.as_ref())
            .opt("IfUnmodifiedSince", self.if_unmodified_since.as_ref())
            .opt("Key", self.key.as_ref())
            .opt("Range", self.range.as_ref())
            .opt("ResponseCacheControl", self.response_cache_control.as_ref())
            .opt(
                "ResponseContentDisposition",
                self.response_content_disposition.as_ref(),
            )
            .opt(
                "ResponseContentEncoding",
                self.response_content_encoding.as_ref(),
            )
            .opt(
                "ResponseContentLanguage",
                self.response_content_language.as_ref(),
            )
            .opt("ResponseContentType", self.response_content_type.as_ref())
            .opt("ResponseExpires", self.response_expires.as_ref())
            .opt("VersionId", self.version_id.as_ref())
            .opt("SSECustomerAlgorithm", self.sse_customer_algorithm.as_ref())
            .opt("SSECustomerKey", self.sse_customer_key.as_ref())
            .opt("SSECustomerKeyMD5", self.sse_customer_key_md5.as_ref())
            .opt("RequestPayer", self.request_payer.as_ref())
            .opt("PartNumber", self.part_number.as_ref())
            .finish()
    }
}

/// Request to store an object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectRequest {
    /// HTTP header: `x-amz-acl`.
    pub acl: Option<ObjectCannedAcl>,
    /// HTTP payload body.
    pub body: Option<Bytes>,
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
    /// HTTP header: `Content-Length`.
    pub content_length: Option<i64>,
    /// HTTP header: `Content-MD5`, base64-encoded.
    pub content_md5: Option<String>,
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

impl PutObjectRequest {
    /// Set the canned ACL for the new object.
    #[must_use]
    pub fn with_acl(mut self, acl: ObjectCannedAcl) -> Self {
        self.acl = Some(acl);
        self
    }

    /// Set the object data.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the bucket to store into.
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

    /// Set the content encodings applied to the body.
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

    /// Set the body size in bytes.
    #[must_use]
    pub fn with_content_length(mut self, content_length: i64) -> Self {
        self.content_length = Some(content_length);
        self
    }

    /// Set the base64-encoded MD5 digest of the body.
    #[must_use]
    pub fn with_content_md5(mut self, digest: impl Into<String>) -> Self {
        self.content_md5 = Some(digest.into());
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

    /// Set the key to store under.
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

    /// Set the storage class of the new object.
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

    /// Set the tag set applied to the object.
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

impl fmt::Display for PutObjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .opt("ACL", self.acl.as_ref())
            .bytes("Body", self.body.as_ref())
            .opt("Bucket", self.bucket.as_ref())
            .opt("CacheControl", self.cache_control.as_ref())
            .opt("ContentDisposition", self.content_disposition.as_ref())
            .opt("ContentEncoding", self.content_encoding.as_ref())
            .opt("ContentLanguage", self.content_language.as_ref())
            .opt("ContentLength", self.content_length.as_ref())
            .opt("ContentMD5", self.content_md5.as_ref())
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

impl Hash for PutObjectRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.acl.hash(state);
        self.body.hash(state);
        self.bucket.hash(state);
        self.cache_control.hash(state);
        self.content_disposition.hash(state);
        self.content_encoding.hash(state);
        self.content_language.hash(state);
        self.content_length.hash(state);
        self.content_md5.hash(state);
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
    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn populated_copy_request() -> CopyObjectRequest {
        CopyObjectRequest::default()
            .with_bucket("my-bucket")
            .with_key("dest.txt")
            .with_copy_source("/src-bucket/src.txt")
            .with_storage_class(StorageClass::StandardIa)
    }

    // -----------------------------------------------------------------------
    // Fluent round-trips
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_roundtrip_values_through_with_methods() {
        let req = populated_copy_request();
        assert_eq!(req.bucket.as_deref(), Some("my-bucket"));
        assert_eq!(req.key.as_deref(), Some("dest.txt"));
        assert_eq!(req.copy_source.as_deref(), Some("/src-bucket/src.txt"));
        assert_eq!(req.storage_class, Some(StorageClass::StandardIa));
    }

    #[test]
    fn test_should_replace_value_on_repeated_with() {
        let req = GetObjectRequest::default()
            .with_part_number(1)
            .with_part_number(7);
        assert_eq!(req.part_number, Some(7));
    }

    #[test]
    fn test_should_store_body_by_content() {
        let req = PutObjectRequest::default().with_body(&b"hello"[..]);
        assert_eq!(req.body.as_deref(), Some(&b"hello"[..]));
    }

    // -----------------------------------------------------------------------
    // Equality and hashing
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_treat_empty_requests_as_equal() {
        assert_eq!(CopyObjectRequest::default(), CopyObjectRequest::default());
        assert_eq!(
            hash_of(&CopyObjectRequest::default()),
            hash_of(&CopyObjectRequest::default())
        );
    }

    #[test]
    fn test_should_be_reflexive_with_stable_hash() {
        let req = populated_copy_request();
        assert_eq!(req, req.clone());
        assert_eq!(hash_of(&req), hash_of(&req));
    }

    #[test]
    fn test_should_equal_independently_built_requests() {
        assert_eq!(populated_copy_request(), populated_copy_request());
        assert_eq!(
            hash_of(&populated_copy_request()),
            hash_of(&populated_copy_request())
        );
    }

    #[test]
    fn test_should_break_equality_when_any_field_is_dropped() {
        let full = populated_copy_request();
        let mut no_bucket = full.clone();
        no_bucket.bucket = None;
        let mut no_key = full.clone();
        no_key.key = None;
        let mut no_source = full.clone();
        no_source.copy_source = None;
        let mut no_class = full.clone();
        no_class.storage_class = None;
        assert_ne!(full, no_bucket);
        assert_ne!(full, no_key);
        assert_ne!(full, no_source);
        assert_ne!(full, no_class);
    }

    #[test]
    fn test_should_hash_equal_requests_regardless_of_metadata_order() {
        let mut a = PutObjectRequest::default();
        a.add_metadata_entry("k1", "v1").unwrap();
        a.add_metadata_entry("k2", "v2").unwrap();
        let mut b = PutObjectRequest::default();
        b.add_metadata_entry("k2", "v2").unwrap();
        b.add_metadata_entry("k1", "v1").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    // -----------------------------------------------------------------------
    // Metadata entries
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_reject_duplicate_metadata_key_and_keep_first_value() {
        let mut req = PutObjectRequest::default();
        req.add_metadata_entry("owner", "alice").expect("first insert");
        let err = req
            .add_metadata_entry("owner", "bob")
            .expect_err("duplicate must fail");
        assert_eq!(err.code, crate::S3ErrorCode::InvalidArgument);
        assert!(err.message.contains("owner"));
        let metadata = req.metadata.expect("metadata set");
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("owner").map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_should_clear_metadata_back_to_unset() {
        let mut req = CopyObjectRequest::default();
        req.add_metadata_entry("a", "1").unwrap();
        req.clear_metadata_entries();
        assert_eq!(req.metadata, None);
        req.add_metadata_entry("a", "2").expect("re-insert after clear");
        assert_eq!(
            req.metadata.as_ref().and_then(|m| m.get("a")).map(String::as_str),
            Some("2")
        );
    }

    #[test]
    fn test_should_allow_overwrite_through_whole_map_replacement() {
        let mut req = PutObjectRequest::default();
        req.add_metadata_entry("owner", "alice").unwrap();
        let replacement =
            HashMap::from([("owner".to_owned(), "bob".to_owned())]);
        let req = req.with_metadata(replacement);
        assert_eq!(
            req.metadata.as_ref().and_then(|m| m.get("owner")).map(String::as_str),
            Some("bob")
        );
    }

    // -----------------------------------------------------------------------
    // Display
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_render_empty_request_as_empty_braces() {
        assert_eq!(CopyObjectRequest::default().to_string(), "{}");
        assert_eq!(GetObjectRequest::default().to_string(), "{}");
        assert_eq!(PutObjectRequest::default().to_string(), "{}");
    }

    #[test]
    fn test_should_render_only_set_fields_in_declaration_order() {
        let req = populated_copy_request();
        assert_eq!(
            req.to_string(),
            "{Bucket: my-bucket, CopySource: /src-bucket/src.txt, Key: dest.txt, \
             StorageClass: STANDARD_IA}"
        );
    }

    #[test]
    fn test_should_render_metadata_sorted_by_key() {
        let mut a = PutObjectRequest::default();
        a.add_metadata_entry("encoder", "x264").unwrap();
        a.add_metadata_entry("owner", "alice").unwrap();
        let mut b = PutObjectRequest::default();
        b.add_metadata_entry("owner", "alice").unwrap();
        b.add_metadata_entry("encoder", "x264").unwrap();
        assert_eq!(
            a.to_string(),
            "{Metadata: {\"encoder\": \"x264\", \"owner\": \"alice\"}}"
        );
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_should_render_body_as_length_summary() {
        let req = PutObjectRequest::default()
            .with_bucket("b")
            .with_body(&b"12345"[..]);
        assert_eq!(req.to_string(), "{Body: <5 bytes>, Bucket: b}");
    }
}
