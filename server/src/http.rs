//! Minimal blocking HTTP/1.1 layer over any Read + Write stream.
//!
//! Intentionally limited surface:
//! - One request per connection (no keep-alive)
//! - No chunked transfer encoding (rejected)
//! - POST requires Content-Length
//! - Header cap: 32 KiB, Body cap: 1 MiB (Read::take, not Content-Length trust)
//!
//! Handlers are transport-free: they take an [`HttpRequest`] and return an
//! [`HttpResponse`], never raw socket types.

use std::io::{Read, Write};

use serde::Serialize;

/// Maximum header section size (32 KiB)
const MAX_HEADER_SIZE: usize = 32 * 1024;

/// Maximum request body size (1 MiB)
const MAX_BODY_SIZE: usize = 1_048_576;

/// Parsed HTTP request (transport-free)
#[derive(Debug)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

/// HTTP response to write back
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a JSON response
    pub fn json(status: u16, value: &impl Serialize) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: serde_json::to_vec(value).unwrap_or_default(),
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Read and parse one HTTP request from a stream.
///
/// Returns None if the connection closed before a complete request was
/// received. Returns Some(Err) for malformed requests (caller should write
/// an error response).
pub fn read_request(stream: &mut impl Read) -> Option<Result<HttpRequest, String>> {
    let mut header_buf = Vec::with_capacity(4096);
    let mut byte = [0u8; 1];

    loop {
        match stream.read(&mut byte) {
            Ok(0) => {
                if header_buf.is_empty() {
                    return None; // clean close
                }
                return Some(Err("Connection closed mid-request".to_string()));
            }
            Ok(_) => {
                header_buf.push(byte[0]);
                if header_buf.len() > MAX_HEADER_SIZE {
                    return Some(Err("Headers too large".to_string()));
                }
                // End of headers (\r\n\r\n)
                if header_buf.len() >= 4 && header_buf[header_buf.len() - 4..] == *b"\r\n\r\n" {
                    break;
                }
            }
            Err(e) => {
                if header_buf.is_empty() {
                    return None;
                }
                return Some(Err(format!("Read error: {}", e)));
            }
        }
    }

    let mut parsed_headers = [httparse::EMPTY_HEADER; 64];
    let mut req = httparse::Request::new(&mut parsed_headers);

    match req.parse(&header_buf) {
        Ok(httparse::Status::Complete(_)) => {}
        Ok(httparse::Status::Partial) => {
            return Some(Err("Incomplete HTTP request".to_string()));
        }
        Err(e) => {
            return Some(Err(format!("HTTP parse error: {}", e)));
        }
    }

    let method = req.method.unwrap_or("").to_string();
    let path = req.path.unwrap_or("/").to_string();

    let mut content_length: Option<usize> = None;
    for h in req.headers.iter() {
        if h.name.eq_ignore_ascii_case("Content-Length") {
            content_length = String::from_utf8_lossy(h.value).trim().parse().ok();
        }
        if h.name.eq_ignore_ascii_case("Transfer-Encoding")
            && String::from_utf8_lossy(h.value).to_lowercase().contains("chunked")
        {
            return Some(Err("Chunked transfer encoding not supported".to_string()));
        }
    }

    let body = if method == "POST" {
        match content_length {
            Some(len) => {
                // Read with cap; Content-Length is not trusted for size enforcement
                let read_limit = (MAX_BODY_SIZE + 1).min(len + 1);
                let mut body = Vec::with_capacity(len.min(MAX_BODY_SIZE));
                let bytes_read = stream
                    .take(read_limit as u64)
                    .read_to_end(&mut body)
                    .unwrap_or(0);
                if bytes_read > MAX_BODY_SIZE {
                    return Some(Err("Request body too large".to_string()));
                }
                body
            }
            None => {
                return Some(Err("POST requires Content-Length".to_string()));
            }
        }
    } else {
        Vec::new()
    };

    Some(Ok(HttpRequest { method, path, body }))
}

/// Write an HTTP response to a stream.
pub fn write_response(stream: &mut impl Write, response: &HttpResponse) {
    let mut header_block = format!(
        "HTTP/1.1 {} {}\r\n",
        response.status,
        reason(response.status)
    );
    header_block.push_str(&format!("Content-Length: {}\r\n", response.body.len()));
    header_block.push_str("Connection: close\r\n");
    for (name, value) in &response.headers {
        header_block.push_str(&format!("{}: {}\r\n", name, value));
    }
    header_block.push_str("\r\n");

    // Ignore write errors; the client may have disconnected
    let _ = stream.write_all(header_block.as_bytes());
    if !response.body.is_empty() {
        let _ = stream.write_all(&response.body);
    }
    let _ = stream.flush();
}

/// Serve one request off a stream and close it.
pub fn handle_connection<S, F>(stream: &mut S, handler: F)
where
    S: Read + Write,
    F: FnOnce(&HttpRequest) -> HttpResponse,
{
    match read_request(stream) {
        Some(Ok(request)) => {
            let response = handler(&request);
            write_response(stream, &response);
        }
        Some(Err(message)) => {
            let response = HttpResponse::json(400, &serde_json::json!({ "error": message }));
            write_response(stream, &response);
        }
        None => {}
    }
}
