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

//! Observability contract shared by the channel namespace crates.
//!
//! Library code emits `tracing` events with a stable `event` name and a `component`
//! field; binaries own `tracing_subscriber` initialization. Classification itself is
//! silent, so these events only come from construction, fallible lookups, and
//! topology handling.

/// Stable event names.
pub mod events {
    pub const CHANNEL_NAMESPACE_INITIALIZED: &str = "channel_namespace_initialized";
    pub const DEDUP_CHANNEL_PREFIX_MISMATCH: &str = "dedup_channel_prefix_mismatch";
    pub const FANOUT_PLAN_BUILT: &str = "fanout_plan_built";
    pub const FANOUT_DATACENTER_NAME_REJECTED: &str = "fanout_datacenter_name_rejected";
    pub const DATACENTERS_FILE_RESOLVED: &str = "datacenters_file_resolved";
    pub const DATACENTERS_LOADED: &str = "datacenters_loaded";
    pub const DATACENTER_ENTRY_SKIPPED: &str = "datacenter_entry_skipped";
}
