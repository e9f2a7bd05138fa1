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

use databus_channels::{is_system_fanout_channel, ChannelNamespace, DataCenters, FanoutPlan};
use datacenters_static_file::DataCentersStaticFile;
use std::path::PathBuf;

fn shipped_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("static-configs")
        .join("datacenters.json")
}

#[test]
fn shipped_topology_plans_fanout_to_remote_datacenters() {
    let topology = DataCentersStaticFile::load(shipped_config()).expect("shipped topology loads");
    assert_eq!(topology.all().len(), 3);

    let plan = FanoutPlan::for_topology(ChannelNamespace::global(), &topology);

    let channels: Vec<_> = plan
        .routes()
        .iter()
        .map(|route| route.channel.as_str())
        .collect();
    assert_eq!(
        channels,
        vec!["__system_bus:out:ap-south-1", "__system_bus:out:eu-west-1"]
    );
    assert!(channels
        .iter()
        .all(|channel| is_system_fanout_channel(channel)));
    assert!(is_system_fanout_channel(plan.master_channel()));
}
