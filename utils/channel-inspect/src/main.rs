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

//! Operator view of the channel namespace.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use databus_channels::{
    classify, dedup_channels, delivery, is_system_fanout_channel, master_canary_subscription,
    master_fanout_channel, master_replay_channel, ChannelClass, ChannelNamespace, DataCenter,
    FanoutPlan,
};
use datacenters_static_file::DataCentersStaticFile;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "channel-inspect")]
#[command(about = "Classify databus channel names and derive system channel names")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print class, delivery and fanout status for each channel name.
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the canary subscription name for a cluster label.
    Canary { cluster: String },
    /// Print the replication fanout plan for a datacenter topology file.
    Fanout {
        #[arg(long, env = "DATABUS_DATACENTERS")]
        datacenters: PathBuf,
    },
    /// Print the fixed system channel names.
    Names,
}

fn describe_class(class: &ChannelClass) -> String {
    match class {
        ChannelClass::User => "user".to_string(),
        ChannelClass::DedupInternal => "dedup-internal".to_string(),
        ChannelClass::System(kind) => format!("system:{kind:?}"),
        ChannelClass::UnknownSystem => "system:unknown".to_string(),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Classify { names } => {
            for name in names {
                println!(
                    "{name}\t{}\t{:?}\tfanout={}",
                    describe_class(&classify(&name)),
                    delivery(&name),
                    is_system_fanout_channel(&name)
                );
            }
        }
        Command::Canary { cluster } => {
            println!("{}", master_canary_subscription(&cluster));
        }
        Command::Fanout { datacenters } => {
            let topology = DataCentersStaticFile::load(&datacenters).with_context(|| {
                format!("unable to load datacenter topology from {datacenters:?}")
            })?;
            let plan = FanoutPlan::for_topology(ChannelNamespace::global(), &topology);

            println!("master\t{}", plan.master_channel());
            for route in plan.routes() {
                println!("{}\t{}", route.datacenter.name(), route.channel);
            }
        }
        Command::Names => {
            println!("master_fanout\t{}", master_fanout_channel());
            println!("master_replay\t{}", master_replay_channel());
            println!("dedup_read_prefix\t{}", dedup_channels().read_prefix());
        }
    }

    Ok(())
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Help and version requests are the only parse outcomes that are not failures.
fn parse_exit_status(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_exit_status(err.kind()));
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            error!("channel-inspect failed: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
