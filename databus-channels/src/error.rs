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

use thiserror::Error;

/// Failures from the fallible helpers layered on top of the namespace.
///
/// Classification and name derivation never fail; only dedup queue-name extraction and
/// datacenter topology validation report errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChannelNameError {
    #[error("channel {channel:?} does not start with expected prefix {expected_prefix:?}")]
    PrefixMismatch {
        channel: String,
        expected_prefix: String,
    },

    #[error("invalid datacenter name {name:?}: {reason}")]
    InvalidDataCenterName { name: String, reason: &'static str },

    #[error("datacenter {name:?} is not part of the topology")]
    UnknownDataCenter { name: String },
}
