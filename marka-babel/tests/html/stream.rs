//! Streaming adapter tests

use crate::common::fallback_converter;
use futures::StreamExt;
use std::time::Duration;

#[tokio::test]
async fn test_stream_yields_lines_in_order() {
    let lines: Vec<String> = fallback_converter()
        .stream("a\nb", 10)
        .await
        .collect()
        .await;
    assert_eq!(lines, vec!["<p>a</p>", "<p>b</p>"]);
}

#[tokio::test]
async fn test_stream_matches_full_conversion() {
    let converter = fallback_converter();
    let source = "# T\n- a\n- b\n```\ncode\n```";

    let full = converter.convert(source).await;
    let streamed: Vec<String> = converter.stream(source, 0).await.collect().await;
    assert_eq!(streamed.join("\n"), full);
}

#[tokio::test]
async fn test_slow_consumer_misses_nothing() {
    let converter = fallback_converter();
    let stream = converter.stream("a\nb\nc", 1).await;
    futures::pin_mut!(stream);

    let mut seen = Vec::new();
    while let Some(line) = stream.next().await {
        tokio::time::sleep(Duration::from_millis(5)).await;
        seen.push(line);
    }
    assert_eq!(seen, vec!["<p>a</p>", "<p>b</p>", "<p>c</p>"]);
}

#[tokio::test]
async fn test_dropping_stream_early() {
    let converter = fallback_converter();
    let first: Vec<String> = converter
        .stream("a\nb\nc", 50)
        .await
        .take(1)
        .collect()
        .await;
    assert_eq!(first, vec!["<p>a</p>"]);
}
