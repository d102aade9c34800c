use wwwserve::http::response::{Response, ResponseBuilder, StatusCode, CONTENT_TYPE};
use wwwserve::http::writer::{serialize_response, ResponseWriter};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::MovedPermanently.as_u16(), 301);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::MovedPermanently.reason_phrase(), "Moved Permanently");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_keeps_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Cache-Control", "no-cache")
        .header(CONTENT_TYPE, "text/css")
        .body(b"body {}".to_vec())
        .build();

    assert_eq!(
        response.headers,
        vec![
            ("Cache-Control".to_string(), "no-cache".to_string()),
            ("Content-type".to_string(), "text/css".to_string()),
        ]
    );
}

#[test]
fn test_response_builder_replaces_header_in_place() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header(CONTENT_TYPE, "text/plain")
        .header("X-Other", "1")
        .header("content-type", "text/html")
        .build();

    assert_eq!(response.headers.len(), 2);
    assert_eq!(response.headers[0].1, "text/html");
    assert_eq!(response.header("Content-Type"), Some("text/html"));
}

#[test]
fn test_response_builder_adds_no_implicit_headers() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"x".to_vec())
        .build();
    assert!(response.headers.is_empty());
}

#[test]
fn test_response_moved_permanently_helper() {
    let response = Response::moved_permanently("/docs/");

    assert_eq!(response.status, StatusCode::MovedPermanently);
    assert_eq!(response.header("Location"), Some("/docs/"));
    assert!(response.body.is_empty());
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.header(CONTENT_TYPE), Some("text/html"));
    assert_eq!(response.body, b"<h1>Not found</h1>".to_vec());
}

#[test]
fn test_response_method_not_allowed_helper() {
    let response = Response::method_not_allowed();

    assert_eq!(response.status, StatusCode::MethodNotAllowed);
    assert_eq!(response.header(CONTENT_TYPE), Some("text/html"));
    assert_eq!(response.body, b"<h1>Method Not Allowed</h1>".to_vec());
}

#[test]
fn test_response_bare_error_helpers() {
    for response in [Response::bad_request(), Response::internal_error()] {
        assert!(response.headers.is_empty());
        assert!(response.body.is_empty());
    }
}

#[test]
fn test_serialize_wire_format() {
    assert_eq!(
        &serialize_response(&Response::not_found())[..],
        b"HTTP/1.1 404 Not Found\r\nContent-type: text/html\r\n\r\n<h1>Not found</h1>"
    );
    assert_eq!(
        &serialize_response(&Response::moved_permanently("/docs/"))[..],
        b"HTTP/1.1 301 Moved Permanently\r\nLocation: /docs/\r\n\r\n"
    );
    assert_eq!(
        &serialize_response(&Response::bad_request())[..],
        b"HTTP/1.1 400 Bad Request\r\n\r\n"
    );
    assert_eq!(
        &serialize_response(&Response::internal_error())[..],
        b"HTTP/1.1 500 Internal Server Error\r\n\r\n"
    );
}

#[tokio::test]
async fn test_response_writer_writes_everything() {
    let response = Response::method_not_allowed();
    let mut writer = ResponseWriter::new(&response);
    assert_eq!(writer.remaining(), serialize_response(&response).len());

    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(writer.remaining(), 0);
    assert_eq!(
        out,
        b"HTTP/1.1 405 Method Not Allowed\r\nContent-type: text/html\r\n\r\n<h1>Method Not Allowed</h1>".to_vec()
    );
}
