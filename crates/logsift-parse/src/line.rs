//! Field scanning of a single access-log line using `nom`.
//!
//! The line layout is the nginx ingress-controller access-log format:
//!
//! ```text
//! remote_addr ident remote_user [time_local] "request" status body_bytes_sent
//! "http_referer" "http_user_agent" request_length request_time
//! [upstream_name] [upstream_alternative] upstream_addr
//! upstream_response_length upstream_response_time upstream_status request_id
//! ```
//!
//! Bare fields are maximal runs of non-whitespace characters; bracketed and
//! quoted fields may be empty and carry no escape processing. A line must be
//! consumed in full to scan — anything else is a malformed line.

use nom::IResult;
use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::{char, multispace1};

/// Raw textual fields of one access-log line, borrowed from the input.
///
/// The `ident` and `remote_user` columns are matched but not retained; they
/// are never populated by the ingress controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// Client address.
    pub remote_addr: &'a str,
    /// Bracketed local timestamp, e.g. `26/Apr/2021:21:20:17 +0000`.
    pub time_local: &'a str,
    /// Quoted request line, e.g. `GET /path?x=1 HTTP/2.0`.
    pub request: &'a str,
    /// Three-digit response status.
    pub status: &'a str,
    /// Response body size in bytes, or `-`.
    pub body_bytes_sent: &'a str,
    /// Quoted referer header value.
    pub http_referer: &'a str,
    /// Quoted user-agent header value.
    pub http_user_agent: &'a str,
    /// Request size in bytes, or `-`.
    pub request_length: &'a str,
    /// Request processing time in seconds, or `-`.
    pub request_time: &'a str,
    /// Bracketed upstream service name.
    pub upstream_name: &'a str,
    /// Bracketed alternative upstream service name.
    pub upstream_alternative: &'a str,
    /// Upstream address.
    pub upstream_addr: &'a str,
    /// Upstream response size in bytes, or `-`.
    pub upstream_response_length: &'a str,
    /// Upstream response time in seconds, or `-`.
    pub upstream_response_time: &'a str,
    /// Upstream status code, or `-`.
    pub upstream_status: &'a str,
    /// Request identifier assigned by the ingress.
    pub request_id: &'a str,
}

/// A bare field: one or more non-whitespace characters.
fn bare(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

/// A `[...]` field; the body may be empty and contains no `]`.
fn bracketed(input: &str) -> IResult<&str, &str> {
    let (input, _) = char('[')(input)?;
    let (input, body) = take_while(|c| c != ']')(input)?;
    let (input, _) = char(']')(input)?;
    Ok((input, body))
}

/// A `"..."` field; the body may be empty and contains no `"`.
fn quoted(input: &str) -> IResult<&str, &str> {
    let (input, _) = char('"')(input)?;
    let (input, body) = take_while(|c| c != '"')(input)?;
    let (input, _) = char('"')(input)?;
    Ok((input, body))
}

/// The status field: exactly three ASCII digits.
fn status3(input: &str) -> IResult<&str, &str> {
    let (rest, digits) = take_while1(|c: char| c.is_ascii_digit())(input)?;
    if digits.len() != 3 {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }
    Ok((rest, digits))
}

fn raw_line(input: &str) -> IResult<&str, RawLine<'_>> {
    let (input, remote_addr) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _ident) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _remote_user) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, time_local) = bracketed(input)?;
    let (input, _) = multispace1(input)?;
    let (input, request) = quoted(input)?;
    let (input, _) = multispace1(input)?;
    let (input, status) = status3(input)?;
    let (input, _) = multispace1(input)?;
    let (input, body_bytes_sent) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, http_referer) = quoted(input)?;
    let (input, _) = multispace1(input)?;
    let (input, http_user_agent) = quoted(input)?;
    let (input, _) = multispace1(input)?;
    let (input, request_length) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, request_time) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, upstream_name) = bracketed(input)?;
    let (input, _) = multispace1(input)?;
    let (input, upstream_alternative) = bracketed(input)?;
    let (input, _) = multispace1(input)?;
    let (input, upstream_addr) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, upstream_response_length) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, upstream_response_time) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, upstream_status) = bare(input)?;
    let (input, _) = multispace1(input)?;
    let (input, request_id) = bare(input)?;

    Ok((
        input,
        RawLine {
            remote_addr,
            time_local,
            request,
            status,
            body_bytes_sent,
            http_referer,
            http_user_agent,
            request_length,
            request_time,
            upstream_name,
            upstream_alternative,
            upstream_addr,
            upstream_response_length,
            upstream_response_time,
            upstream_status,
            request_id,
        },
    ))
}

/// Scans one log line into its raw fields.
///
/// Returns `None` if the line does not match the format, including any
/// unconsumed trailing input.
#[must_use]
pub fn scan_line(line: &str) -> Option<RawLine<'_>> {
    match raw_line(line) {
        Ok(("", raw)) => Some(raw),
        _ => None,
    }
}
