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

//! Cluster-label canonicalization for canary subscriptions.

/// Lower-cases `cluster` and replaces each space with a hyphen.
///
/// Labels that differ only in letter case or in space-vs-hyphen spelling map to the
/// same canonical name, so "East Coast" and "east-coast" share one canary
/// subscription. Applying it twice yields the same result as applying it once.
pub(crate) fn canonicalize_cluster(cluster: &str) -> String {
    cluster.to_lowercase().replace(' ', "-")
}
