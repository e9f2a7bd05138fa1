/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Read/write channel pairing for the dedup queue.
//!
//! A dedup queue consumes raw events from a write channel and exposes deduplicated
//! events on a read channel. The mapping below names both sides from the queue name.
//! The namespace holds one mapping for the whole process and hands it to the dedup
//! subsystem; it never looks inside it for classification.

use crate::error::ChannelNameError;
use crate::observability::events;
use tracing::debug;

const COMPONENT: &str = "dedup_channels";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DedupChannelMapping {
    write_prefix: String,
    read_prefix: String,
}

impl DedupChannelMapping {
    /// Writes go to the plain channel named after the queue; reads come from
    /// `read_prefix + queue`.
    pub fn shared_write_channel(read_prefix: impl Into<String>) -> Self {
        Self {
            write_prefix: String::new(),
            read_prefix: read_prefix.into(),
        }
    }

    /// Both sides carry their own prefix.
    pub fn isolated(write_prefix: impl Into<String>, read_prefix: impl Into<String>) -> Self {
        Self {
            write_prefix: write_prefix.into(),
            read_prefix: read_prefix.into(),
        }
    }

    pub fn write_prefix(&self) -> &str {
        &self.write_prefix
    }

    pub fn read_prefix(&self) -> &str {
        &self.read_prefix
    }

    pub fn write_channel(&self, queue: &str) -> String {
        format!("{}{queue}", self.write_prefix)
    }

    pub fn read_channel(&self, queue: &str) -> String {
        format!("{}{queue}", self.read_prefix)
    }

    /// Recovers the queue name from a write channel.
    pub fn queue_from_write_channel<'a>(
        &self,
        channel: &'a str,
    ) -> Result<&'a str, ChannelNameError> {
        Self::strip(channel, &self.write_prefix)
    }

    /// Recovers the queue name from a read channel.
    pub fn queue_from_read_channel<'a>(
        &self,
        channel: &'a str,
    ) -> Result<&'a str, ChannelNameError> {
        Self::strip(channel, &self.read_prefix)
    }

    fn strip<'a>(channel: &'a str, prefix: &str) -> Result<&'a str, ChannelNameError> {
        channel.strip_prefix(prefix).ok_or_else(|| {
            debug!(
                event = events::DEDUP_CHANNEL_PREFIX_MISMATCH,
                component = COMPONENT,
                channel,
                expected_prefix = prefix,
                "channel is not owned by this dedup mapping"
            );
            ChannelNameError::PrefixMismatch {
                channel: channel.to_string(),
                expected_prefix: prefix.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DedupChannelMapping;
    use crate::error::ChannelNameError;

    #[test]
    fn shared_write_channel_writes_to_plain_queue_name() {
        let mapping = DedupChannelMapping::shared_write_channel("__dedupq_read:");

        assert_eq!(mapping.write_prefix(), "");
        assert_eq!(mapping.write_channel("orders"), "orders");
        assert_eq!(mapping.read_channel("orders"), "__dedupq_read:orders");
    }

    #[test]
    fn isolated_prefixes_both_sides() {
        let mapping = DedupChannelMapping::isolated("__dedupq_write:", "__dedupq_read:");

        assert_eq!(mapping.write_channel("orders"), "__dedupq_write:orders");
        assert_eq!(mapping.read_channel("orders"), "__dedupq_read:orders");
    }

    #[test]
    fn queue_name_is_recovered_from_read_channel() {
        let mapping = DedupChannelMapping::shared_write_channel("__dedupq_read:");

        assert_eq!(
            mapping.queue_from_read_channel("__dedupq_read:orders"),
            Ok("orders")
        );
        assert_eq!(mapping.queue_from_write_channel("orders"), Ok("orders"));
    }

    #[test]
    fn foreign_read_channel_is_rejected() {
        let mapping = DedupChannelMapping::shared_write_channel("__dedupq_read:");

        assert_eq!(
            mapping.queue_from_read_channel("orders"),
            Err(ChannelNameError::PrefixMismatch {
                channel: "orders".to_string(),
                expected_prefix: "__dedupq_read:".to_string(),
            })
        );
    }
}
