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

//! Fanout planning across a datacenter topology.
//!
//! Replicators read system events from the master fanout channel and mirror them onto
//! one replication fanout channel per remote datacenter.

use crate::datacenter::{validate_datacenter_name, DataCenter, DataCenters, NamedDataCenter};
use crate::observability::events;
use crate::registry::ChannelNamespace;
use std::collections::BTreeMap;
use tracing::{debug, warn};

const COMPONENT: &str = "fanout";

/// One remote datacenter and the channel its events are mirrored onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FanoutRoute {
    pub datacenter: NamedDataCenter,
    pub channel: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FanoutPlan {
    master_channel: &'static str,
    routes: Vec<FanoutRoute>,
}

impl FanoutPlan {
    /// Plans replication from the local datacenter to every other datacenter in the
    /// topology. Routes are ordered by datacenter name; names that fail validation are
    /// left out.
    pub fn for_topology(namespace: &ChannelNamespace, topology: &dyn DataCenters) -> Self {
        let local = topology.self_datacenter().name();
        let mut routes = BTreeMap::new();

        for datacenter in topology.all() {
            let name = datacenter.name();
            if name == local {
                continue;
            }
            if let Err(err) = validate_datacenter_name(name) {
                warn!(
                    event = events::FANOUT_DATACENTER_NAME_REJECTED,
                    component = COMPONENT,
                    datacenter = name,
                    err = %err,
                    "skipping datacenter with unusable name"
                );
                continue;
            }

            routes.entry(name.to_string()).or_insert_with(|| FanoutRoute {
                datacenter: datacenter.clone(),
                channel: namespace.replication_fanout_channel(datacenter),
            });
        }

        let plan = Self {
            master_channel: namespace.master_fanout_channel(),
            routes: routes.into_values().collect(),
        };

        debug!(
            event = events::FANOUT_PLAN_BUILT,
            component = COMPONENT,
            local_datacenter = local,
            route_count = plan.routes.len(),
            "fanout plan built"
        );

        plan
    }

    pub fn master_channel(&self) -> &str {
        self.master_channel
    }

    pub fn routes(&self) -> &[FanoutRoute] {
        &self.routes
    }

    pub fn channel_for(&self, datacenter: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|route| route.datacenter.name() == datacenter)
            .map(|route| route.channel.as_str())
    }
}
