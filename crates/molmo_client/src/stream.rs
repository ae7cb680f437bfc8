//! Accumulation of newline-delimited JSON response streams
//!
//! Endpoints reply with one JSON record per line, each carrying a text
//! fragment at `result.output.text`. Fragments are appended in arrival
//! order; the concatenation is the final answer.

use bytes::Bytes;
use futures::{pin_mut, Stream, StreamExt};
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// One line of the response body
#[derive(Debug, Deserialize)]
struct StreamChunk {
    result: ChunkResult,
}

#[derive(Debug, Deserialize)]
struct ChunkResult {
    output: ChunkOutput,
}

#[derive(Debug, Deserialize)]
struct ChunkOutput {
    text: String,
}

/// Reduce a stream of body bytes to the concatenated fragment text.
///
/// Network chunks do not align with lines: a line may span several
/// chunks and a chunk may carry several lines, so bytes are buffered
/// until a newline arrives. A trailing unterminated line is processed
/// at end of stream. Any malformed line fails the whole call; no
/// partial result is returned.
pub(crate) async fn collect_stream<S, E>(stream: S) -> Result<String>
where
    S: Stream<Item = std::result::Result<Bytes, E>>,
    ApiError: From<E>,
{
    pin_mut!(stream);

    let mut pending: Vec<u8> = Vec::new();
    let mut accumulated = String::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        pending.extend_from_slice(&chunk);

        while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = pending.drain(..=pos).collect();
            append_fragment(&line, &mut accumulated)?;
        }
    }
    append_fragment(&pending, &mut accumulated)?;

    Ok(accumulated)
}

/// Parse one line and append its text fragment to the accumulator.
/// Blank lines are skipped.
fn append_fragment(line: &[u8], accumulated: &mut String) -> Result<()> {
    if line.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(());
    }

    match serde_json::from_slice::<StreamChunk>(line) {
        Ok(chunk) => {
            accumulated.push_str(&chunk.result.output.text);
            Ok(())
        }
        Err(source) => {
            let line = String::from_utf8_lossy(line).trim().to_string();
            // Valid JSON without the expected field is reported
            // separately from unparseable bytes.
            if serde_json::from_str::<serde_json::Value>(&line).is_ok() {
                Err(ApiError::MissingText { line })
            } else {
                Err(ApiError::MalformedChunk { line, source })
            }
        }
    }
}
