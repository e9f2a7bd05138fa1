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

//! Reserved channel-name prefixes.
//!
//! `concat!` keeps every derived literal anchored on [`SYSTEM_PREFIX`] at compile time.

macro_rules! system_prefix {
    () => {
        "__system_bus:"
    };
}

/// Marks a channel as bus-internal.
pub(crate) const SYSTEM_PREFIX: &str = system_prefix!();

/// The single global fanout channel every node publishes system events to.
pub(crate) const MASTER_FANOUT: &str = concat!(system_prefix!(), "master");

/// Per-datacenter fanout channels are this prefix followed by the datacenter name.
pub(crate) const REPLICATION_FANOUT_PREFIX: &str = concat!(system_prefix!(), "out:");

/// Replays previously delivered system events.
pub(crate) const MASTER_REPLAY: &str = concat!(system_prefix!(), "replay");

pub(crate) const MASTER_CANARY_PREFIX: &str = concat!(system_prefix!(), "canary");

/// Joins [`MASTER_CANARY_PREFIX`] and the canonical cluster name.
pub(crate) const CANARY_CLUSTER_SEPARATOR: char = '-';

/// Reserved by the dedup queue for its own read/write channels.
pub(crate) const DEDUP_INTERNAL_PREFIX: &str = "__dedupq_";

pub(crate) const DEDUP_READ_PREFIX: &str = "__dedupq_read:";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_kinds_share_the_system_prefix() {
        for literal in [
            MASTER_FANOUT,
            REPLICATION_FANOUT_PREFIX,
            MASTER_REPLAY,
            MASTER_CANARY_PREFIX,
        ] {
            assert!(literal.starts_with(SYSTEM_PREFIX), "{literal}");
        }
    }

    #[test]
    fn literals_are_bit_exact() {
        assert_eq!(SYSTEM_PREFIX, "__system_bus:");
        assert_eq!(MASTER_FANOUT, "__system_bus:master");
        assert_eq!(REPLICATION_FANOUT_PREFIX, "__system_bus:out:");
        assert_eq!(MASTER_REPLAY, "__system_bus:replay");
        assert_eq!(MASTER_CANARY_PREFIX, "__system_bus:canary");
        assert_eq!(DEDUP_READ_PREFIX, "__dedupq_read:");
    }

    #[test]
    fn dedup_read_prefix_sits_under_dedup_internal_prefix() {
        assert!(DEDUP_READ_PREFIX.starts_with(DEDUP_INTERNAL_PREFIX));
        assert!(!DEDUP_INTERNAL_PREFIX.starts_with(SYSTEM_PREFIX));
    }
}
