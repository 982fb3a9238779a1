//! Lifecycle specs
//!
//! Verify inert fallbacks and close semantics.

use crate::prelude::*;

#[tokio::test]
async fn no_destination_writes_nothing() {
    let mut writer = AppendWriter::open(None, NoOpProducer, WriterConfig::default());

    writer.write_line("ignored");
    writer.close().await;

    assert!(writer.is_inert());
    assert_eq!(writer.bytes_written(), 0);
}

#[tokio::test]
async fn unreachable_destination_degrades_to_inert() {
    let dest = Destination::unreachable();
    let producer = FakeProducer::new();

    let mut writer =
        AppendWriter::open(Some(dest.path()), producer.clone(), WriterConfig::default());
    writer.write_line("x");
    writer.close().await;

    assert!(writer.is_inert());
    assert!(!dest.exists());
    assert!(producer.calls().is_empty());
}

#[test]
fn opening_outside_a_runtime_degrades_to_inert() {
    let dest = Destination::new();

    let mut writer = AppendWriter::open(Some(dest.path()), NoOpProducer, WriterConfig::default());
    writer.write_line("x");

    assert!(writer.is_inert());
    assert!(!dest.exists());
}

#[tokio::test]
async fn writes_after_close_do_not_reach_the_file() {
    let dest = Destination::new();
    let mut writer = AppendWriter::open(Some(dest.path()), NoOpProducer, WriterConfig::default());

    writer.write_line("kept");
    writer.close().await;
    writer.write_line("dropped");
    writer.close().await;

    assert!(writer.is_closed());
    dest.assert_contents("kept\n");
}

#[tokio::test]
async fn close_flushes_everything_accepted() {
    let dest = Destination::new();
    let mut writer = AppendWriter::open(Some(dest.path()), NoOpProducer, WriterConfig::default());

    let mut expected = String::new();
    for i in 0..1000 {
        let line = format!("line-{i}");
        writer.write_line(&line);
        expected.push_str(&line);
        expected.push('\n');
    }
    writer.close().await;

    dest.assert_contents(&expected);
}
