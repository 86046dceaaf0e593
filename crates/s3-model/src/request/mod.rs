//! Request records for the object operations.

mod multipart;
mod object;

pub use multipart::CreateMultipartUploadRequest;
pub use object::{CopyObjectRequest, GetObjectRequest, PutObjectRequest};
