// Resume file uploads. Files are stored verbatim; no parsing happens here.

pub mod handlers;
pub mod storage;
