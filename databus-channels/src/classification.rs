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

//! Whole-name classification built on the prefix checks.

use crate::namespace::prefixes::{DEDUP_INTERNAL_PREFIX, SYSTEM_PREFIX};
use crate::system_channel::SystemChannel;

/// Which part of the namespace a channel name falls in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChannelClass {
    /// Ordinary user-created channel.
    User,
    /// Owned by the dedup queue. Checked before anything else, so a user name that
    /// collides with the dedup convention still lands here.
    DedupInternal,
    /// One of the known system kinds.
    System(SystemChannel),
    /// Under the system prefix but not produced by any known kind.
    UnknownSystem,
}

impl ChannelClass {
    pub(crate) fn of(name: &str) -> Self {
        if name.starts_with(DEDUP_INTERNAL_PREFIX) {
            return ChannelClass::DedupInternal;
        }
        if !name.starts_with(SYSTEM_PREFIX) {
            return ChannelClass::User;
        }

        match SystemChannel::parse(name) {
            Some(kind) => ChannelClass::System(kind),
            None => ChannelClass::UnknownSystem,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, ChannelClass::System(_) | ChannelClass::UnknownSystem)
    }
}

/// Delivery semantics the subscription router applies to a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// Duplicate publishes are collapsed by the dedup queue.
    Deduped,
    /// Every publish is delivered.
    Raw,
}

impl Delivery {
    pub(crate) fn from_non_deduped(non_deduped: bool) -> Self {
        if non_deduped {
            Delivery::Raw
        } else {
            Delivery::Deduped
        }
    }
}
