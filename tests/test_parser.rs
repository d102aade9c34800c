use wwwserve::http::parser::{parse_request, tokens, ParseError, READ_WINDOW};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/");
}

#[test]
fn test_parse_ignores_headers_and_body() {
    let req = b"POST /form HTTP/1.1\r\nContent-Length: 5\r\nX-Other: a b c\r\n\r\nhello";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, "POST");
    assert_eq!(parsed.target, "/form");
}

#[test]
fn test_parse_without_version() {
    let parsed = parse_request(b"GET /base.css").unwrap();
    assert_eq!(parsed.target, "/base.css");
}

#[test]
fn test_parse_keeps_unknown_method_token() {
    let parsed = parse_request(b"FOO /x HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(parsed.method, "FOO");
    assert_eq!(parsed.target, "/x");
}

#[test]
fn test_parse_surrounding_whitespace() {
    let parsed = parse_request(b"  \r\n GET   /deep/  HTTP/1.1 \r\n\r\n   ").unwrap();
    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/deep/");
}

#[test]
fn test_parse_tokens_may_span_lines() {
    // The buffer is split as a whole, not line by line
    let parsed = parse_request(b"GET\r\n/index.html\r\n\r\n").unwrap();
    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/index.html");
}

#[test]
fn test_parse_empty_input_is_malformed() {
    assert_eq!(parse_request(b""), Err(ParseError::Malformed));
    assert_eq!(parse_request(b" \r\n\r\n"), Err(ParseError::Malformed));
}

#[test]
fn test_parse_single_token_is_malformed() {
    assert_eq!(parse_request(b"GET"), Err(ParseError::Malformed));
    assert_eq!(parse_request(b"GET\r\n\r\n"), Err(ParseError::Malformed));
}

#[test]
fn test_parse_invalid_utf8() {
    let result = parse_request(b"GET /\xff\xfe HTTP/1.1\r\n\r\n");
    assert!(matches!(result, Err(ParseError::InvalidEncoding)));
}

#[test]
fn test_tokens_for_logging() {
    assert_eq!(
        tokens(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n"),
        vec!["GET", "/", "HTTP/1.1", "Host:", "x"]
    );
    assert!(tokens(b"").is_empty());
}

#[test]
fn test_read_window() {
    assert_eq!(READ_WINDOW, 1024);
}
