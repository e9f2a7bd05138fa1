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

use databus_channels::{
    classify, dedup_channels, delivery, is_non_deduped, is_system_channel,
    is_system_fanout_channel, master_canary_subscription, master_fanout_channel,
    master_replay_channel, replication_fanout_channel, ChannelClass, Delivery, NamedDataCenter,
    SystemChannel,
};
use proptest::prelude::*;
use std::thread;

const CANARY_PREFIX: &str = "__system_bus:canary-";

fn canonical_cluster(cluster: &str) -> String {
    master_canary_subscription(cluster)
        .strip_prefix(CANARY_PREFIX)
        .expect("canary subscriptions carry the canary prefix")
        .to_string()
}

proptest! {
    #[test]
    fn system_channel_matches_prefix(name in "\\PC{0,40}") {
        prop_assert_eq!(is_system_channel(&name), name.starts_with("__system_bus:"));
    }

    #[test]
    fn prefixed_names_are_system_channels(suffix in "\\PC{0,40}") {
        let name = format!("__system_bus:{suffix}");
        prop_assert!(is_system_channel(&name));
    }

    #[test]
    fn replication_channels_are_fanout_and_distinct(
        first in "[a-z0-9-]{1,16}",
        second in "[a-z0-9-]{1,16}"
    ) {
        let first_channel = replication_fanout_channel(&NamedDataCenter::new(first.clone()));
        let second_channel = replication_fanout_channel(&NamedDataCenter::new(second.clone()));

        prop_assert!(is_system_fanout_channel(&first_channel));
        prop_assert!(first_channel.starts_with("__system_bus:"));
        prop_assert_eq!(first == second, first_channel == second_channel);
    }

    #[test]
    fn canonicalization_is_idempotent(cluster in "\\PC{0,32}") {
        let once = canonical_cluster(&cluster);
        let twice = canonical_cluster(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn canary_subscriptions_are_deduped_system_channels(cluster in "[A-Za-z0-9 ]{0,32}") {
        let subscription = master_canary_subscription(&cluster);

        prop_assert!(is_system_channel(&subscription));
        prop_assert!(!is_non_deduped(&subscription));
        prop_assert!(!is_system_fanout_channel(&subscription));
    }

    #[test]
    fn dedup_internal_names_are_never_deduped(suffix in "\\PC{0,40}") {
        let name = format!("__dedupq_{suffix}");
        prop_assert!(is_non_deduped(&name));
        prop_assert_eq!(delivery(&name), Delivery::Raw);
        prop_assert_eq!(classify(&name), ChannelClass::DedupInternal);
    }
}

#[test]
fn canonicalization_is_idempotent_for_context_sensitive_lowercasing() {
    for cluster in ["ΟΔΟΣ", "ΑΣ Β", "Σ", "İstanbul Cluster", "ẞtraße", "ǅungla"] {
        let once = canonical_cluster(cluster);
        assert_eq!(canonical_cluster(&once), once, "{cluster}");
    }
}

#[test]
fn master_and_replication_channels_are_fanout() {
    assert!(is_system_fanout_channel(master_fanout_channel()));
    for name in ["us-east-1", "eu-west-1", "ap-south-1"] {
        assert!(is_system_fanout_channel(&replication_fanout_channel(name)));
    }
}

#[test]
fn canary_labels_collapse_to_one_subscription() {
    assert_eq!(
        master_canary_subscription("East Coast"),
        master_canary_subscription("east-coast")
    );
    assert_eq!(
        master_canary_subscription("East Coast"),
        "__system_bus:canary-east-coast"
    );
}

#[test]
fn only_canary_is_deduped_among_system_channels() {
    assert!(is_non_deduped(master_fanout_channel()));
    assert!(is_non_deduped(master_replay_channel()));
    assert!(!is_non_deduped(&master_canary_subscription("x")));
}

#[test]
fn dedup_read_channel_escapes_dedup_without_being_system() {
    assert!(is_non_deduped("__dedupq_read:anything"));
    assert!(!is_system_channel("__dedupq_read:anything"));
}

#[test]
fn dedup_channels_is_constructed_once() {
    let first = dedup_channels();
    let second = dedup_channels();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first, second);
    assert_eq!(first.read_prefix(), "__dedupq_read:");
}

#[test]
fn replication_fanout_for_us_east_1() {
    let datacenter = NamedDataCenter::new("us-east-1");
    assert_eq!(
        replication_fanout_channel(&datacenter),
        "__system_bus:out:us-east-1"
    );
}

#[test]
fn canary_subscription_for_qa_cluster() {
    assert_eq!(
        master_canary_subscription("QA Cluster"),
        "__system_bus:canary-qa-cluster"
    );
}

#[test]
fn user_channels_classify_as_user_with_deduped_delivery() {
    assert_eq!(classify("orders"), ChannelClass::User);
    assert_eq!(delivery("orders"), Delivery::Deduped);
    assert!(!is_system_fanout_channel("orders"));
}

#[test]
fn classify_resolves_every_system_kind() {
    assert_eq!(
        classify(master_replay_channel()),
        ChannelClass::System(SystemChannel::MasterReplay)
    );
    assert_eq!(
        classify(&master_canary_subscription("QA Cluster")),
        ChannelClass::System(SystemChannel::MasterCanary("qa-cluster".to_string()))
    );
}

#[test]
fn concurrent_readers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let datacenter = format!("dc-{i}");
                (
                    replication_fanout_channel(&datacenter),
                    master_canary_subscription("Shared Cluster"),
                    dedup_channels() as *const _ as usize,
                )
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("reader thread panicked"))
        .collect();

    for (i, (replication, canary, mapping)) in results.iter().enumerate() {
        assert_eq!(replication, &format!("__system_bus:out:dc-{i}"));
        assert_eq!(canary, "__system_bus:canary-shared-cluster");
        assert_eq!(*mapping, dedup_channels() as *const _ as usize);
    }
}
