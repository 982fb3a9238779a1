//! Backpressure specs
//!
//! Verify that a real file sink pauses and resumes the producer.

use crate::prelude::*;

#[tokio::test]
async fn gated_producer_delivers_every_line() {
    let dest = Destination::new();
    let gate = PauseGate::new();
    let config = tight_config(1 << 20, 64);
    let mut writer = AppendWriter::from_config(Some(dest.path()), gate.clone(), &config);

    let mut expected = String::new();
    let produce = async {
        for i in 0..300 {
            gate.ready().await;
            let line = format!("{{\"seq\":{i}}}");
            writer.write_line(&line);
            expected.push_str(&line);
            expected.push('\n');
        }
    };
    tokio::time::timeout(Duration::from_secs(10), produce)
        .await
        .expect("producer should never stay paused");
    writer.close().await;

    dest.assert_contents(&expected);
}

#[tokio::test]
async fn saturated_sink_pauses_producer() {
    let dest = Destination::new();
    let producer = FakeProducer::new();
    let config = tight_config(1 << 20, 1);
    let mut writer = AppendWriter::from_config(Some(dest.path()), producer.clone(), &config);

    writer.write_line("first");
    assert_eq!(producer.calls().first(), Some(&ProducerCall::Pause));

    writer.close().await;
    assert!(producer.resume_count() <= producer.pause_count());
    dest.assert_contents("first\n");
}

#[tokio::test]
async fn drain_resumes_producer() {
    let dest = Destination::new();
    let producer = FakeProducer::new();
    let config = tight_config(1 << 20, 1);
    let mut writer = AppendWriter::from_config(Some(dest.path()), producer.clone(), &config);

    writer.write_line("first");
    let resumed = async {
        while producer.resume_count() == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    };
    tokio::time::timeout(Duration::from_secs(5), resumed)
        .await
        .expect("drain should resume the producer");

    assert!(!writer.is_backpressured());
    writer.close().await;
    assert_eq!(producer.calls(), vec![ProducerCall::Pause, ProducerCall::Resume]);
}
