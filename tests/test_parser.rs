use staticd::http::parser::{ParseError, parse_request_line};
use staticd::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = parse_request_line("GET / HTTP/1.1\r\n").unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/");
    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_parse_trims_line_terminator() {
    let req = parse_request_line("GET /about HTTP/1.1\r\n").unwrap();

    assert_eq!(req.path, "/about");
    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_parse_path_is_kept_raw() {
    // No URL-decoding, no query handling: the token is kept as-is
    let req = parse_request_line("GET /files/a%20b.txt HTTP/1.1\r\n").unwrap();

    assert_eq!(req.path, "/files/a%20b.txt");
}

#[test]
fn test_parse_too_few_tokens_is_malformed() {
    assert!(matches!(
        parse_request_line("GET /\r\n"),
        Err(ParseError::MalformedRequestLine)
    ));
    assert!(matches!(
        parse_request_line("GET\r\n"),
        Err(ParseError::MalformedRequestLine)
    ));
    assert!(matches!(
        parse_request_line("\r\n"),
        Err(ParseError::MalformedRequestLine)
    ));
}

#[test]
fn test_parse_unknown_method_token() {
    assert!(matches!(
        parse_request_line("FROB / HTTP/1.1\r\n"),
        Err(ParseError::UnsupportedMethod)
    ));
    // Methods are case-sensitive
    assert!(matches!(
        parse_request_line("get / HTTP/1.1\r\n"),
        Err(ParseError::UnsupportedMethod)
    ));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let line = format!("{} / HTTP/1.1\r\n", method_str);
        let req = parse_request_line(&line).unwrap();
        assert_eq!(req.method, expected_method);
    }
}

#[test]
fn test_parse_extra_tokens_are_ignored() {
    let req = parse_request_line("GET / HTTP/1.1 junk\r\n").unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/");
    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_parse_splits_on_single_spaces() {
    // Consecutive spaces produce an empty path token rather than skipping it
    let req = parse_request_line("GET  / HTTP/1.1\r\n").unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "");
}

#[test]
fn test_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("INVALID"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
}
