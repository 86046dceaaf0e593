//! Data model for the S3 object API.
//!
//! This crate holds the inert value objects exchanged with an S3-compatible
//! transport layer: request records (`CopyObjectRequest`, `PutObjectRequest`,
//! ...), result records (`GetObjectResult`, `HeadObjectResult`) and reusable
//! configuration records (`InventoryConfiguration`). Every field is optional
//! and maps to a documented HTTP header, query parameter or XML element;
//! marshaling, signing and transport live elsewhere.
//!
//! Records are built incrementally through fluent `with_*` chains:
//!
//! ```
//! use s3_model::request::CopyObjectRequest;
//! use s3_model::types::StorageClass;
//!
//! let req = CopyObjectRequest::default()
//!     .with_bucket("my-bucket")
//!     .with_key("dest.txt")
//!     .with_copy_source("/src-bucket/src.txt")
//!     .with_storage_class(StorageClass::StandardIa);
//! assert_eq!(req.bucket.as_deref(), Some("my-bucket"));
//! ```
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod request;
pub mod result;
pub mod types;
mod util;

pub use error::{S3Error, S3ErrorCode};
