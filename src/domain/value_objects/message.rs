//! Message handed over by the host for decoration

use std::collections::HashMap;

/// One Kafka message as the inspection tool sees it.
///
/// Only `cluster_id`, `topic` and `payload` take part in decoding; the rest
/// is context the host passes along and shows up in logs.
#[derive(Debug, Clone, Copy)]
pub struct RawMessage<'a> {
    pub cluster_id: &'a str,
    pub broker_host: &'a str,
    pub topic: &'a str,
    pub partition: i64,
    pub offset: i64,
    pub payload: &'a [u8],
    pub extra: Option<&'a HashMap<String, String>>,
}

impl<'a> RawMessage<'a> {
    /// Message with only the fields decoding needs.
    pub fn new(cluster_id: &'a str, topic: &'a str, payload: &'a [u8]) -> Self {
        Self {
            cluster_id,
            broker_host: "",
            topic,
            partition: 0,
            offset: 0,
            payload,
            extra: None,
        }
    }

    pub fn with_broker(mut self, broker_host: &'a str) -> Self {
        self.broker_host = broker_host;
        self
    }

    pub fn with_position(mut self, partition: i64, offset: i64) -> Self {
        self.partition = partition;
        self.offset = offset;
        self
    }

    pub fn with_extra(mut self, extra: &'a HashMap<String, String>) -> Self {
        self.extra = Some(extra);
        self
    }
}
