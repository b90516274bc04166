mod file_bytes_stream;
mod file_response_builder;
mod path;

pub use self::file_bytes_stream::*;
pub use self::file_response_builder::*;

pub(crate) use self::path::*;
