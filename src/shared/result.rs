/// Type alias for Result with anyhow::Error as the error type.
/// Application and adapter code propagates through this alias; the parser
/// itself returns the typed `TreeParseError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
