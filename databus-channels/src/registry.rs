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

//! The channel namespace registry.
//!
//! [`ChannelNamespace`] is an immutable value. The process-wide instance is built once
//! on first use and then shared by reference, so concurrent readers never synchronize
//! after that first access.

use crate::classification::{ChannelClass, Delivery};
use crate::datacenter::DataCenter;
use crate::dedup_channels::DedupChannelMapping;
use crate::namespace::prefixes::{
    DEDUP_INTERNAL_PREFIX, DEDUP_READ_PREFIX, MASTER_CANARY_PREFIX, MASTER_FANOUT, MASTER_REPLAY,
    REPLICATION_FANOUT_PREFIX, SYSTEM_PREFIX,
};
use crate::observability::events;
use crate::system_channel::SystemChannel;
use lazy_static::lazy_static;
use tracing::debug;

const COMPONENT: &str = "channel_namespace";

lazy_static! {
    static ref CHANNEL_NAMESPACE: ChannelNamespace =
        ChannelNamespace::new(DedupChannelMapping::shared_write_channel(DEDUP_READ_PREFIX));
}

/// Classifies channel names and derives system channel names.
///
/// All methods are pure. Prefix literals are fixed at compile time; the only carried
/// state is the dedup channel mapping handed to the dedup subsystem.
#[derive(Debug)]
pub struct ChannelNamespace {
    dedup_channels: DedupChannelMapping,
}

impl ChannelNamespace {
    /// Builds a namespace around a dedup mapping. Most callers want [`Self::global`].
    pub fn new(dedup_channels: DedupChannelMapping) -> Self {
        debug!(
            event = events::CHANNEL_NAMESPACE_INITIALIZED,
            component = COMPONENT,
            system_prefix = SYSTEM_PREFIX,
            dedup_read_prefix = dedup_channels.read_prefix(),
            dedup_write_prefix = dedup_channels.write_prefix(),
            "channel namespace initialized"
        );

        Self { dedup_channels }
    }

    /// The process-wide namespace, built on first access.
    pub fn global() -> &'static ChannelNamespace {
        &CHANNEL_NAMESPACE
    }

    pub fn is_system_channel(&self, name: &str) -> bool {
        name.starts_with(SYSTEM_PREFIX)
    }

    /// `true` for the master fanout channel and for every replication fanout channel,
    /// whichever datacenter it targets.
    pub fn is_system_fanout_channel(&self, name: &str) -> bool {
        name == MASTER_FANOUT || name.starts_with(REPLICATION_FANOUT_PREFIX)
    }

    pub fn master_fanout_channel(&self) -> &'static str {
        MASTER_FANOUT
    }

    /// Replication prefix followed by the datacenter name, verbatim.
    pub fn replication_fanout_channel<D: DataCenter + ?Sized>(&self, datacenter: &D) -> String {
        SystemChannel::replication_fanout(datacenter).channel_name()
    }

    pub fn master_replay_channel(&self) -> &'static str {
        MASTER_REPLAY
    }

    /// Canary subscription name for a cluster. Cluster labels differing only in case
    /// or in space-vs-hyphen spelling share a subscription.
    pub fn master_canary_subscription(&self, cluster: &str) -> String {
        SystemChannel::master_canary(cluster).channel_name()
    }

    /// `true` when the channel must bypass the dedup queue.
    ///
    /// System channels other than the canary need every event delivered. Names under
    /// the dedup-internal prefix get raw delivery even when they are not system
    /// channels, so a user channel that happens to collide with the dedup queue naming
    /// is never captured by it.
    pub fn is_non_deduped(&self, name: &str) -> bool {
        (self.is_system_channel(name) && !name.starts_with(MASTER_CANARY_PREFIX))
            || name.starts_with(DEDUP_INTERNAL_PREFIX)
    }

    pub fn dedup_channels(&self) -> &DedupChannelMapping {
        &self.dedup_channels
    }

    pub fn classify(&self, name: &str) -> ChannelClass {
        ChannelClass::of(name)
    }

    pub fn delivery(&self, name: &str) -> Delivery {
        Delivery::from_non_deduped(self.is_non_deduped(name))
    }
}
