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

//! The closed set of bus-internal channel kinds.

use crate::datacenter::DataCenter;
use crate::namespace::canonical::canonicalize_cluster;
use crate::namespace::prefixes::{
    CANARY_CLUSTER_SEPARATOR, MASTER_CANARY_PREFIX, MASTER_FANOUT, MASTER_REPLAY,
    REPLICATION_FANOUT_PREFIX,
};
use std::fmt::{Display, Formatter};

/// A bus-internal channel, identified by kind and, where the kind is parameterized,
/// by its datacenter or cluster.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SystemChannel {
    /// The global fanout channel every node publishes system events to.
    MasterFanout,
    /// Fanout towards one remote datacenter, keyed by its verbatim name.
    ReplicationFanout(String),
    /// Replay of previously delivered system events.
    MasterReplay,
    /// Per-cluster monitoring subscription, keyed by the canonical cluster name.
    MasterCanary(String),
}

impl SystemChannel {
    pub fn replication_fanout<D: DataCenter + ?Sized>(datacenter: &D) -> Self {
        SystemChannel::ReplicationFanout(datacenter.name().to_string())
    }

    /// Canonicalizes `cluster` before keying the canary on it.
    pub fn master_canary(cluster: &str) -> Self {
        SystemChannel::MasterCanary(canonicalize_cluster(cluster))
    }

    pub fn channel_name(&self) -> String {
        match self {
            SystemChannel::MasterFanout => MASTER_FANOUT.to_string(),
            SystemChannel::ReplicationFanout(datacenter) => {
                format!("{REPLICATION_FANOUT_PREFIX}{datacenter}")
            }
            SystemChannel::MasterReplay => MASTER_REPLAY.to_string(),
            SystemChannel::MasterCanary(cluster) => {
                format!("{MASTER_CANARY_PREFIX}{CANARY_CLUSTER_SEPARATOR}{cluster}")
            }
        }
    }

    /// Maps a channel name back to the kind that produced it.
    ///
    /// Returns `None` for user channels, dedup-internal channels, and names under the
    /// system prefix that no kind produces. Parameters are taken verbatim; no
    /// canonicalization is applied to a parsed canary cluster.
    pub fn parse(name: &str) -> Option<Self> {
        if name == MASTER_FANOUT {
            return Some(SystemChannel::MasterFanout);
        }
        if name == MASTER_REPLAY {
            return Some(SystemChannel::MasterReplay);
        }
        if let Some(datacenter) = name.strip_prefix(REPLICATION_FANOUT_PREFIX) {
            return Some(SystemChannel::ReplicationFanout(datacenter.to_string()));
        }

        name.strip_prefix(MASTER_CANARY_PREFIX)
            .and_then(|rest| rest.strip_prefix(CANARY_CLUSTER_SEPARATOR))
            .map(|cluster| SystemChannel::MasterCanary(cluster.to_string()))
    }

    /// Fanout kinds are mirrored across datacenters by the replicators.
    pub fn is_fanout(&self) -> bool {
        matches!(
            self,
            SystemChannel::MasterFanout | SystemChannel::ReplicationFanout(_)
        )
    }

    /// The canary is the only system kind that goes through the dedup queue.
    pub fn is_deduped(&self) -> bool {
        matches!(self, SystemChannel::MasterCanary(_))
    }
}

impl Display for SystemChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.channel_name())
    }
}
