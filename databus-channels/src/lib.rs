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

//! # databus-channels
//!
//! `databus-channels` is the channel namespace of the databus: it decides, from a
//! channel name alone, whether the channel is user-created or bus-internal, whether it
//! is a cross-datacenter fanout target, and whether it is delivered through the dedup
//! queue. Every node in every datacenter reaches the same answer for the same name, so
//! the naming scheme is the only agreement the replicators, dedup queues, subscription
//! routers and canaries need.
//!
//! ## Classification
//!
//! ```
//! use databus_channels::{
//!     is_non_deduped, is_system_channel, is_system_fanout_channel, master_fanout_channel,
//!     master_replay_channel,
//! };
//!
//! assert!(is_system_channel(master_fanout_channel()));
//! assert!(is_system_fanout_channel(master_fanout_channel()));
//! assert!(!is_system_fanout_channel(master_replay_channel()));
//!
//! // Replay and fanout must see every event.
//! assert!(is_non_deduped(master_replay_channel()));
//!
//! // Names owned by the dedup queue always get raw delivery.
//! assert!(is_non_deduped("__dedupq_read:orders"));
//! assert!(!is_system_channel("__dedupq_read:orders"));
//! ```
//!
//! ## Name derivation
//!
//! ```
//! use databus_channels::{master_canary_subscription, replication_fanout_channel, NamedDataCenter};
//!
//! let datacenter = NamedDataCenter::new("us-east-1");
//! assert_eq!(
//!     replication_fanout_channel(&datacenter),
//!     "__system_bus:out:us-east-1"
//! );
//!
//! // Cluster labels are canonicalized, so these share one canary subscription.
//! assert_eq!(
//!     master_canary_subscription("East Coast"),
//!     master_canary_subscription("east-coast")
//! );
//! ```
//!
//! ## Dedup channels
//!
//! ```
//! use databus_channels::dedup_channels;
//!
//! let mapping = dedup_channels();
//! assert_eq!(mapping.read_channel("orders"), "__dedupq_read:orders");
//! assert_eq!(mapping.write_channel("orders"), "orders");
//! assert!(std::ptr::eq(mapping, dedup_channels()));
//! ```
//!
//! ## Internal architecture map
//!
//! - Namespace: reserved prefix literals and cluster canonicalization
//! - System channels: the closed set of internal channel kinds
//! - Registry: the immutable, process-wide [`ChannelNamespace`]
//! - Fanout: replication planning over a [`DataCenters`] topology
//!
//! ## Observability model
//!
//! The workspace uses `tracing` for logs/events.
//! Library code emits events and does not initialize a global subscriber.
//! Binaries are responsible for one-time `tracing_subscriber` initialization.

mod classification;
pub use classification::{ChannelClass, Delivery};

mod datacenter;
pub use datacenter::{validate_datacenter_name, DataCenter, DataCenters, NamedDataCenter};

mod dedup_channels;
pub use dedup_channels::DedupChannelMapping;

mod error;
pub use error::ChannelNameError;

mod fanout;
pub use fanout::{FanoutPlan, FanoutRoute};

mod namespace;

#[doc(hidden)]
pub mod observability;

mod registry;
pub use registry::ChannelNamespace;

mod system_channel;
pub use system_channel::SystemChannel;

/// `true` iff `name` starts with the system prefix.
pub fn is_system_channel(name: &str) -> bool {
    ChannelNamespace::global().is_system_channel(name)
}

/// `true` for the master fanout channel and any replication fanout channel.
pub fn is_system_fanout_channel(name: &str) -> bool {
    ChannelNamespace::global().is_system_fanout_channel(name)
}

pub fn master_fanout_channel() -> &'static str {
    ChannelNamespace::global().master_fanout_channel()
}

pub fn replication_fanout_channel<D: DataCenter + ?Sized>(datacenter: &D) -> String {
    ChannelNamespace::global().replication_fanout_channel(datacenter)
}

pub fn master_replay_channel() -> &'static str {
    ChannelNamespace::global().master_replay_channel()
}

pub fn master_canary_subscription(cluster: &str) -> String {
    ChannelNamespace::global().master_canary_subscription(cluster)
}

/// `true` when the channel bypasses the dedup queue.
pub fn is_non_deduped(name: &str) -> bool {
    ChannelNamespace::global().is_non_deduped(name)
}

/// The process-wide dedup channel mapping; the same instance on every call.
pub fn dedup_channels() -> &'static DedupChannelMapping {
    ChannelNamespace::global().dedup_channels()
}

pub fn classify(name: &str) -> ChannelClass {
    ChannelNamespace::global().classify(name)
}

pub fn delivery(name: &str) -> Delivery {
    ChannelNamespace::global().delivery(name)
}
