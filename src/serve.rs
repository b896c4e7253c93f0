use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::Result;
use crate::router::{Request, Response, Router};

/// One output line: `{status, headers, body}`.
#[derive(Serialize)]
struct Envelope<'a> {
    status: u16,
    headers: BTreeMap<&'static str, &'static str>,
    body: &'a Value,
}

impl<'a> From<&'a Response> for Envelope<'a> {
    fn from(response: &'a Response) -> Self {
        Self {
            status: response.status,
            headers: response.headers().into_iter().collect(),
            body: &response.body,
        }
    }
}

/// Answer request lines from `reader`, writing one envelope per line to
/// `writer`.
///
/// Blank lines are skipped. Lines that are not UTF-8 or do not parse get a 400
/// envelope and the loop keeps going; only I/O errors end it. Returns the
/// number of responses written.
pub fn serve_lines<R: BufRead, W: Write>(router: &Router, reader: R, mut writer: W) -> Result<usize> {
    let mut handled = 0;
    for raw in reader.split(b'\n') {
        let raw = raw?;
        let response = match std::str::from_utf8(&raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => match Request::from_line(line) {
                Ok(request) => router.handle(&request),
                Err(e) => {
                    warn!(error = %e, "rejected request line");
                    Response::bad_request(&e.to_string())
                }
            },
            Err(e) => {
                warn!(error = %e, "request line is not valid UTF-8");
                Response::bad_request("request line is not valid UTF-8")
            }
        };

        serde_json::to_writer(&mut writer, &Envelope::from(&response))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        handled += 1;
    }
    info!(handled, "request input exhausted");
    Ok(handled)
}
