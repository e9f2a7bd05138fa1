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

//! Read-only datacenter topology backed by a static JSON file.
//!
//! ```json
//! {
//!     "self": "us-east-1",
//!     "system": "us-east-1",
//!     "datacenters": ["us-east-1", "eu-west-1", "ap-south-1"]
//! }
//! ```
//!
//! `system` is optional and defaults to `self`.

use databus_channels::observability::events;
use databus_channels::{
    validate_datacenter_name, ChannelNameError, DataCenter, DataCenters, NamedDataCenter,
};
use serde_json::{Map, Value};
use std::fs::{self, canonicalize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const COMPONENT: &str = "datacenters_static_file";

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("static datacenter file not found: {path:?}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read static datacenter file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to parse static datacenter file as JSON")]
    Parse(#[from] serde_json::Error),

    #[error("malformed static datacenter file: {0}")]
    Shape(String),

    #[error(transparent)]
    Validation(#[from] ChannelNameError),
}

#[derive(Clone, Debug)]
pub struct DataCentersStaticFile {
    local: NamedDataCenter,
    system: NamedDataCenter,
    all: Vec<NamedDataCenter>,
}

impl DataCentersStaticFile {
    /// Reads and validates the topology at `static_file`.
    pub fn load(static_file: impl AsRef<Path>) -> Result<Self, TopologyError> {
        let value = Self::read_static_config_json(static_file.as_ref())?;
        Self::from_value(&value)
    }

    fn canonicalized_static_file_path(static_file: &Path) -> Result<PathBuf, TopologyError> {
        let canonicalized = canonicalize(static_file)
            .map_err(|source| Self::path_error(static_file, source))?;

        debug!(
            event = events::DATACENTERS_FILE_RESOLVED,
            component = COMPONENT,
            requested_path = %static_file.display(),
            resolved_path = %canonicalized.display(),
            "static datacenter file resolved"
        );

        Ok(canonicalized)
    }

    /// Only a missing path is `NotFound`; every other I/O failure is a read failure.
    fn path_error(static_file: &Path, source: io::Error) -> TopologyError {
        let path = static_file.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => TopologyError::NotFound { path, source },
            _ => TopologyError::Read { path, source },
        }
    }

    fn read_static_config_json(static_file: &Path) -> Result<Value, TopologyError> {
        let datacenters_json_file = Self::canonicalized_static_file_path(static_file)?;
        let data = fs::read_to_string(&datacenters_json_file).map_err(|source| {
            TopologyError::Read {
                path: datacenters_json_file.clone(),
                source,
            }
        })?;

        Ok(serde_json::from_str(&data)?)
    }

    /// Builds the topology from an already parsed JSON document.
    pub fn from_value(value: &Value) -> Result<Self, TopologyError> {
        let Some(entries) = value.as_object() else {
            return Err(TopologyError::Shape(
                "static datacenter file must be a JSON object".to_string(),
            ));
        };

        let local_name = Self::string_field(entries, "self")?
            .ok_or_else(|| TopologyError::Shape("missing string field \"self\"".to_string()))?;
        let system_name = Self::string_field(entries, "system")?.unwrap_or(local_name);

        let Some(datacenter_values) = entries.get("datacenters").and_then(Value::as_array) else {
            return Err(TopologyError::Shape(
                "missing array field \"datacenters\"".to_string(),
            ));
        };

        let mut all: Vec<NamedDataCenter> = Vec::with_capacity(datacenter_values.len());
        for datacenter_value in datacenter_values {
            let Some(name) = datacenter_value.as_str() else {
                warn!(
                    event = events::DATACENTER_ENTRY_SKIPPED,
                    component = COMPONENT,
                    entry = %datacenter_value,
                    "ignoring non-string datacenter entry"
                );
                continue;
            };

            validate_datacenter_name(name)?;
            if all.iter().any(|known| known.name() == name) {
                warn!(
                    event = events::DATACENTER_ENTRY_SKIPPED,
                    component = COMPONENT,
                    datacenter = name,
                    "ignoring duplicate datacenter entry"
                );
                continue;
            }
            all.push(NamedDataCenter::new(name));
        }

        let local = Self::find(&all, local_name)?;
        let system = Self::find(&all, system_name)?;

        debug!(
            event = events::DATACENTERS_LOADED,
            component = COMPONENT,
            local_datacenter = %local,
            system_datacenter = %system,
            datacenter_count = all.len(),
            "static datacenter topology loaded"
        );

        Ok(Self { local, system, all })
    }

    fn string_field<'a>(
        entries: &'a Map<String, Value>,
        field: &'static str,
    ) -> Result<Option<&'a str>, TopologyError> {
        match entries.get(field) {
            None => Ok(None),
            Some(Value::String(name)) => Ok(Some(name.as_str())),
            Some(other) => Err(TopologyError::Shape(format!(
                "field {field:?} must be a string, found {other}"
            ))),
        }
    }

    fn find(all: &[NamedDataCenter], name: &str) -> Result<NamedDataCenter, TopologyError> {
        validate_datacenter_name(name)?;
        all.iter()
            .find(|datacenter| datacenter.name() == name)
            .cloned()
            .ok_or_else(|| {
                ChannelNameError::UnknownDataCenter {
                    name: name.to_string(),
                }
                .into()
            })
    }
}

impl DataCenters for DataCentersStaticFile {
    fn self_datacenter(&self) -> &NamedDataCenter {
        &self.local
    }

    fn system_datacenter(&self) -> &NamedDataCenter {
        &self.system
    }

    fn all(&self) -> &[NamedDataCenter] {
        &self.all
    }
}
