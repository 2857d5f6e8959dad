//! Client reuse and failure containment.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use avro_decorator::domain::ports::CancelPrompter;
use avro_decorator::{MessageDecorator, RawMessage, DISPLAY_NAME};

use crate::common::{CountingFactory, Harness};

fn harness_with(content: &str, factory: CountingFactory) -> (Harness, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("endpoints.properties");
    std::fs::write(&path, content).unwrap();
    let h = Harness::new(path, Arc::new(CancelPrompter), Arc::new(factory));
    (h, dir)
}

#[test]
fn contract_display_name_is_avro() {
    let (h, _dir) = harness_with("", CountingFactory::default());
    assert_eq!(h.decorator.display_name(), DISPLAY_NAME);
}

#[test]
fn contract_concurrent_first_decodes_share_one_client() {
    let (h, _dir) = harness_with(
        "zk\\:2181=http\\://registry\\:8081\n",
        CountingFactory::slow(Duration::from_millis(50)),
    );
    let decorator = Arc::new(h.decorator);

    let callers: Vec<_> = (0..6)
        .map(|i| {
            let decorator = Arc::clone(&decorator);
            thread::spawn(move || {
                let payload = format!("m{}", i);
                decorator.decorate(&RawMessage::new("zk:2181", "orders", payload.as_bytes()))
            })
        })
        .collect();
    for caller in callers {
        assert!(caller.join().unwrap().starts_with('{'));
    }

    assert_eq!(h.factory.created(), 1);
    assert_eq!(decorator.cache().len(), 1);
}

#[test]
fn contract_clusters_on_one_endpoint_share_a_client() {
    let (h, _dir) = harness_with(
        "zk-a=http\\://shared\\:8081\nzk-b=http\\://shared\\:8081\nzk-c=http\\://other\\:8081\n",
        CountingFactory::default(),
    );
    for cluster in ["zk-a", "zk-b", "zk-a", "zk-c"] {
        h.decorator
            .decorate(&RawMessage::new(cluster, "orders", b"v"));
    }
    assert_eq!(h.factory.created(), 2);
}

#[test]
fn contract_decode_faults_become_error_text() {
    let (h, _dir) = harness_with("zk=host\\:8081\n", CountingFactory::default());

    let failed = h
        .decorator
        .decorate(&RawMessage::new("zk", "orders", b"bad"));
    assert_eq!(
        failed,
        "Error: cannot deserialize record from topic 'orders': schema 42 not found"
    );

    let panicked = h
        .decorator
        .decorate(&RawMessage::new("zk", "orders", b"boom"));
    assert!(panicked.starts_with("Error: "), "{}", panicked);

    // The decorator keeps working after a panic.
    assert!(h
        .decorator
        .decorate(&RawMessage::new("zk", "orders", b"ok"))
        .starts_with('{'));
}

#[test]
fn contract_repeated_calls_are_stable() {
    let (h, _dir) = harness_with("zk=host\\:8081\n", CountingFactory::default());
    let message = RawMessage::new("zk", "orders", b"same").with_position(1, 99);
    let first = h.decorator.decorate(&message);
    for _ in 0..5 {
        assert_eq!(h.decorator.decorate(&message), first);
    }
}
