/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters,
/// keeping the domain layer isolated.
mod output_format;
mod parse_request;
mod parse_response;

pub use output_format::OutputFormat;
pub use parse_request::ParseRequest;
pub use parse_response::ParseResponse;
