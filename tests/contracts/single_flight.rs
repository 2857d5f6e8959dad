//! Only one endpoint prompt is open per decorator, and callers never wait for it.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use avro_decorator::{MessageDecorator, RawMessage, MISSING_ENDPOINT};

use crate::common::{CountingFactory, GatedPrompter, Harness};

fn harness() -> (Harness, crate::common::PromptControl, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let (prompter, control) = GatedPrompter::new();
    let harness = Harness::new(
        dir.path().join("endpoints.properties"),
        Arc::new(prompter),
        Arc::new(CountingFactory::default()),
    );
    (harness, control, dir)
}

#[test]
fn contract_first_call_returns_placeholder_and_opens_one_prompt() {
    let (h, control, _dir) = harness();
    let message = RawMessage::new("zk-a:2181", "orders", b"v1");

    assert_eq!(h.decorator.decorate(&message), MISSING_ENDPOINT);
    assert_eq!(control.expect_prompt().as_str(), "zk-a:2181");
    assert!(h.decorator.resolver().is_prompt_open());

    // While the prompt is open every cluster gets the placeholder, and no
    // second prompt is scheduled.
    assert_eq!(h.decorator.decorate(&message), MISSING_ENDPOINT);
    assert_eq!(
        h.decorator
            .decorate(&RawMessage::new("zk-b:2181", "orders", b"v1")),
        MISSING_ENDPOINT
    );

    control.answer(Some("host:8081"));
    h.dispatcher.flush().unwrap();

    assert!(control.no_prompt_pending());
    assert!(!h.decorator.resolver().is_prompt_open());
    assert_eq!(
        h.decorator.decorate(&message),
        r#"{"endpoint":"host:8081","payload":"v1"}"#
    );
}

#[test]
fn contract_decorate_never_waits_for_the_operator() {
    let (h, control, _dir) = harness();
    let decorator = Arc::new(h.decorator);

    let callers: Vec<_> = (0..8)
        .map(|i| {
            let decorator = Arc::clone(&decorator);
            thread::spawn(move || {
                let cluster = format!("zk-{}:2181", i % 2);
                decorator.decorate(&RawMessage::new(&cluster, "orders", b"v"))
            })
        })
        .collect();

    // The operator has not answered yet; every caller must still return.
    for caller in callers {
        assert_eq!(caller.join().unwrap(), MISSING_ENDPOINT);
    }

    control.expect_prompt();
    thread::sleep(Duration::from_millis(50));
    assert!(control.no_prompt_pending());

    control.answer(None);
    h.dispatcher.flush().unwrap();
    assert!(!decorator.resolver().is_prompt_open());
}

#[test]
fn contract_empty_answer_leaves_cluster_unresolved() {
    let (h, control, _dir) = harness();
    let message = RawMessage::new("zk-empty:2181", "orders", b"v");

    assert_eq!(h.decorator.decorate(&message), MISSING_ENDPOINT);
    control.expect_prompt();
    control.answer(Some(""));
    h.dispatcher.flush().unwrap();

    assert!(!h.decorator.resolver().is_prompt_open());
    assert!(h.store.snapshot().is_empty());
    assert!(h.shell.errors().is_empty());

    // Next call asks again.
    assert_eq!(h.decorator.decorate(&message), MISSING_ENDPOINT);
    control.expect_prompt();
    control.answer(None);
    h.dispatcher.flush().unwrap();
}

#[test]
fn contract_malformed_answer_commits_nothing() {
    let (h, control, _dir) = harness();
    let message = RawMessage::new("zk-bad:2181", "orders", b"v");

    assert_eq!(h.decorator.decorate(&message), MISSING_ENDPOINT);
    control.expect_prompt();
    control.answer(Some("host:8081?user=%E0%A4"));
    h.dispatcher.flush().unwrap();

    assert!(!h.decorator.resolver().is_prompt_open());
    assert!(h.store.snapshot().is_empty());
    let errors = h.shell.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, "Cannot process URL");
}
