use crate::http::request::Request;

/// Most bytes taken from a connection. Anything past this window is never read.
pub const READ_WINDOW: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than two whitespace-separated tokens
    Malformed,
    /// Bytes are not UTF-8
    InvalidEncoding,
}

/// Pulls the method and target out of one read's worth of bytes.
///
/// The whole buffer is split on whitespace and the first two tokens are used;
/// the HTTP version, headers and body are ignored.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;

    let mut tokens = text.split_whitespace();
    let method = tokens.next().ok_or(ParseError::Malformed)?;
    let target = tokens.next().ok_or(ParseError::Malformed)?;

    Ok(Request::new(method, target))
}

/// All whitespace-separated tokens of a raw request, for debug logging.
pub fn tokens(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
