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

//! Channel-name grammar.
//!
//! Holds the reserved prefix literals and the cluster-name canonicalization used by
//! canary subscriptions. These literals are the cross-datacenter contract: every node
//! classifies a channel by inspecting these prefixes, so they must stay bit-exact
//! across releases. Nothing outside this crate should repeat them.
//!
//! ```
//! use databus_channels::{is_system_channel, master_fanout_channel};
//!
//! assert!(is_system_channel(master_fanout_channel()));
//! assert!(!is_system_channel("orders"));
//! ```

pub(crate) mod canonical;
pub(crate) mod prefixes;
