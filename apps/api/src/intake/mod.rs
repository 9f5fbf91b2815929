// File intake
// Implements: multipart upload parsing, extension validation, the drop zone.
// Validation is by file name only; uploads are always read as text.

pub mod drop_zone;
pub mod file_type;
pub mod handlers;
pub mod upload;
