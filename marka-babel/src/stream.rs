//! Line-paced streaming of converted output
//!
//! The whole conversion is computed up front; the stream only reveals it one line
//! at a time, pausing between lines. Dropping the stream cancels it: nothing is
//! held besides the precomputed lines.

use async_stream::stream;
use futures::Stream;
use std::time::Duration;

/// Yield each line of `markup` in order, sleeping `delay` after every line.
pub fn stream_lines(markup: String, delay: Duration) -> impl Stream<Item = String> {
    stream! {
        let lines: Vec<String> = markup.split('\n').map(str::to_string).collect();
        for line in lines {
            yield line;
            tokio::time::sleep(delay).await;
        }
    }
}
