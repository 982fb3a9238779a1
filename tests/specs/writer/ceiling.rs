//! Size ceiling specs
//!
//! Verify the total-size ceiling truncates output without partial lines.

use crate::prelude::*;

#[tokio::test]
async fn line_crossing_the_ceiling_is_dropped_whole() {
    let dest = Destination::new();
    let mut writer = AppendWriter::open(
        Some(dest.path()),
        NoOpProducer,
        WriterConfig::with_max_bytes(5),
    );

    writer.write_line("ab");
    writer.write_line("cd");
    writer.close().await;

    dest.assert_contents("ab\n");
    assert_eq!(writer.bytes_written(), 3);
}

#[tokio::test]
async fn output_never_exceeds_the_ceiling() {
    let dest = Destination::new();
    let max_bytes = 1000;
    let mut writer = AppendWriter::open(
        Some(dest.path()),
        NoOpProducer,
        WriterConfig::with_max_bytes(max_bytes),
    );

    for i in 0..500 {
        writer.write_line(&format!("{{\"seq\":{i}}}"));
    }
    writer.close().await;

    let contents = dest.contents();
    assert!(contents.len() as u64 <= max_bytes);
    assert_eq!(contents.len() as u64, writer.bytes_written());
    assert!(contents.ends_with('\n'));
    assert!(contents.starts_with("{\"seq\":0}\n"));
}

#[tokio::test]
async fn ceiling_applies_per_writer_not_per_file() {
    let dest = Destination::new();
    dest.seed("0123456789\n");

    let mut writer = AppendWriter::open(
        Some(dest.path()),
        NoOpProducer,
        WriterConfig::with_max_bytes(4),
    );
    writer.write_line("abc");
    writer.close().await;

    dest.assert_contents("0123456789\nabc\n");
}
