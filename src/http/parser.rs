use crate::http::request::{Method, Request};

#[derive(Debug)]
pub enum ParseError {
    /// Fewer than three space-separated tokens. Policy: close without a response.
    MalformedRequestLine,
    /// Three tokens, but the method is not one we recognize. Policy: 405.
    UnsupportedMethod,
}

/// Parses an HTTP request line (`METHOD SP PATH SP VERSION`).
///
/// The line is trimmed and split on single spaces; at least three tokens are
/// required. Anything after the version token is ignored.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let tokens: Vec<&str> = line.trim().split(' ').collect();

    if tokens.len() < 3 {
        return Err(ParseError::MalformedRequestLine);
    }

    let method = Method::from_str(tokens[0]).ok_or(ParseError::UnsupportedMethod)?;

    Ok(Request {
        method,
        path: tokens[1].to_string(),
        version: tokens[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_request_line("GET /index.html HTTP/1.1\r\n").unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/index.html");
        assert_eq!(req.version, "HTTP/1.1");
    }
}
