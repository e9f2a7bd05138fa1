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

//! Datacenter identities consumed by fanout derivation.
//!
//! The namespace never owns datacenters; it only reads a stable name from them.

use crate::error::ChannelNameError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Anything that carries a stable datacenter name.
///
/// The name is used verbatim in replication fanout channel names, so uniqueness of
/// datacenter names is what keeps replication channels distinct.
pub trait DataCenter {
    fn name(&self) -> &str;
}

impl DataCenter for str {
    fn name(&self) -> &str {
        self
    }
}

impl DataCenter for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<T: DataCenter + ?Sized> DataCenter for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Plain named datacenter, as read from topology configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamedDataCenter {
    name: String,
}

impl NamedDataCenter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Builds a datacenter after checking the name with [`validate_datacenter_name`].
    pub fn try_new(name: impl Into<String>) -> Result<Self, ChannelNameError> {
        let name = name.into();
        validate_datacenter_name(&name)?;
        Ok(Self { name })
    }
}

impl DataCenter for NamedDataCenter {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Display for NamedDataCenter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Topology view: the local datacenter, the datacenter hosting system work, and all
/// known datacenters (local one included).
pub trait DataCenters {
    fn self_datacenter(&self) -> &NamedDataCenter;

    fn system_datacenter(&self) -> &NamedDataCenter;

    fn all(&self) -> &[NamedDataCenter];
}

/// Checks that a datacenter name can be embedded in a channel name without blurring
/// the prefix grammar.
///
/// Replication fanout derivation does not call this; it concatenates verbatim.
/// Topology loaders call it so bad names are caught at configuration time.
pub fn validate_datacenter_name(name: &str) -> Result<(), ChannelNameError> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.contains(':') {
        Some("name contains ':' which separates channel name segments")
    } else if name.chars().any(char::is_whitespace) {
        Some("name contains whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ChannelNameError::InvalidDataCenterName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
