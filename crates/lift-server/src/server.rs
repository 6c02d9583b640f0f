//! Newline-delimited JSON over TCP.

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::protocol::{Request, Response};
use crate::{ServerResult, SimHandle};

/// Longest request line accepted, newline included.
pub const MAX_LINE_BYTES: u64 = 64 * 1024;

/// Accept connections forever, serving each on its own task.
///
/// All connections share `handle`, so every client sees the same building.
pub async fn serve(listener: TcpListener, handle: SimHandle) -> ServerResult<()> {
    log::info!("listening on {}", listener.local_addr()?);
    loop {
        let (stream, peer) = listener.accept().await?;
        log::debug!("connection from {peer}");
        let handle = handle.clone();
        tokio::spawn(async move {
            if let Err(e) = serve_connection(stream, handle).await {
                log::warn!("connection {peer} closed: {e}");
            }
        });
    }
}

/// Answer requests on one connection until the client hangs up.
///
/// A line longer than [`MAX_LINE_BYTES`] is refused and the connection
/// closed, since the rest of the stream can no longer be framed.
pub async fn serve_connection(stream: TcpStream, handle: SimHandle) -> ServerResult<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = (&mut reader).take(MAX_LINE_BYTES).read_until(b'\n', &mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        if !buf.ends_with(b"\n") && n as u64 == MAX_LINE_BYTES {
            let refusal = Response::rejected(format!("request line exceeds {MAX_LINE_BYTES} bytes"));
            reply(&mut writer, &refusal).await?;
            log::warn!("closing connection after an oversized request line");
            return Ok(());
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => respond(&handle, line.trim_end()).await,
            Err(e) => Response::rejected(format!("malformed request: {e}")),
        };
        reply(&mut writer, &response).await?;
    }
}

async fn reply<W: AsyncWrite + Unpin>(writer: &mut W, response: &Response) -> ServerResult<()> {
    let mut out = serde_json::to_vec(response)?;
    out.push(b'\n');
    writer.write_all(&out).await?;
    Ok(())
}

/// Parse one request line and execute it.
pub async fn respond(handle: &SimHandle, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            log::trace!("request {request:?}");
            handle.execute(request).await
        }
        Err(e) => Response::rejected(format!("malformed request: {e}")),
    }
}
