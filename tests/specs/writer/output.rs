//! Output specs
//!
//! Verify what a writer appends to its destination file.

use crate::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct Event<'a> {
    seq: u32,
    kind: &'a str,
}

#[tokio::test]
async fn lines_are_appended_in_call_order() {
    let dest = Destination::new();
    let mut writer = AppendWriter::open(Some(dest.path()), NoOpProducer, WriterConfig::default());

    writer.write_line(r#"{"type":"user"}"#);
    writer.write_line(r#"{"type":"assistant"}"#);
    writer.close().await;

    dest.assert_contents("{\"type\":\"user\"}\n{\"type\":\"assistant\"}\n");
}

#[tokio::test]
async fn existing_content_is_preserved() {
    let dest = Destination::new();
    dest.seed("earlier\n");

    let mut writer = AppendWriter::open(Some(dest.path()), NoOpProducer, WriterConfig::default());
    writer.write_line("later");
    writer.close().await;

    dest.assert_contents("earlier\nlater\n");
}

#[tokio::test]
async fn blank_lines_never_reach_the_file() {
    let dest = Destination::new();
    let mut writer = AppendWriter::open(Some(dest.path()), NoOpProducer, WriterConfig::default());

    writer.write_line("");
    writer.write_line("a");
    writer.write_line("   ");
    writer.write_line("b");
    writer.close().await;

    dest.assert_contents("a\nb\n");
    assert_eq!(writer.bytes_written(), 4);
}

#[tokio::test]
async fn records_are_written_as_json_lines() {
    let dest = Destination::new();
    let mut writer = AppendWriter::open(Some(dest.path()), NoOpProducer, WriterConfig::default());

    writer.write_record(&Event { seq: 1, kind: "start" });
    writer.write_record(&Event { seq: 2, kind: "stop" });
    writer.close().await;

    dest.assert_contents("{\"seq\":1,\"kind\":\"start\"}\n{\"seq\":2,\"kind\":\"stop\"}\n");
}

#[tokio::test]
async fn writer_built_from_toml_config() {
    let dest = Destination::new();
    let config = Config::from_toml_str("[writer]\nmax_bytes = 4\n").unwrap();

    let mut writer = AppendWriter::from_config(Some(dest.path()), NoOpProducer, &config);
    writer.write_line("abc");
    writer.write_line("d");
    writer.close().await;

    dest.assert_contents("abc\n");
}
