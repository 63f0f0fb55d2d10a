// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # ap-capacity
//!
//! Loads a JSON snapshot of premises, out-of-service beds and bookings,
//! runs one reporting operation over it and prints the result as JSON on
//! stdout. Logs go to stderr.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod snapshot;

use std::path::PathBuf;

use ap_capacity_api::{
    InMemoryPremisesRepository, NationalOccupancyRequest, PremisesCapacityRequest,
    PremisesSearchRequest, ReportingConfig, SummaryShape, get_booking_statuses,
    get_national_occupancy, get_premises_capacity, get_premises_day_summary, get_premises_summary,
    search_premises,
};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::WrapErr};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::snapshot::Snapshot;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:?}");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|err| format!("expected RFC 3339: {err}"))
}

#[derive(Debug, Parser)]
#[command(name = "ap-capacity", version, about, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    /// Snapshot of premises records to report on
    #[arg(long, value_name = "PATH")]
    snapshot: PathBuf,

    /// IANA zone that decides which calendar day "now" falls on
    #[arg(long, env = "AP_CAPACITY_TIMEZONE", default_value = "Europe/London")]
    timezone: String,

    /// Instant to report as of (defaults to the current time)
    #[arg(long, value_parser = parse_timestamp)]
    now: Option<OffsetDateTime>,

    /// Days ahead that premises summaries scan for overbooking
    #[arg(long, default_value_t = ap_capacity_api::DEFAULT_SUMMARY_HORIZON_DAYS)]
    horizon_days: u16,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        let config: ReportingConfig = ReportingConfig::new(&self.timezone, self.horizon_days)?;
        let repository: InMemoryPremisesRepository =
            Snapshot::load(&self.snapshot)?.into_repository()?;
        let now: OffsetDateTime = self.now.unwrap_or_else(OffsetDateTime::now_utc);

        self.command.run(&repository, &config, now)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Shape {
    Full,
    Basic,
    SearchResult,
}

impl From<Shape> for SummaryShape {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Full => Self::Full,
            Shape::Basic => Self::Basic,
            Shape::SearchResult => Self::SearchResult,
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Day-by-day capacity of one premises
    #[command(visible_alias = "cap")]
    Capacity {
        /// Premises to report on
        #[arg(long)]
        premises: String,
        /// First day (inclusive)
        #[arg(long, value_parser = parse_date)]
        start: Date,
        /// Last day (inclusive)
        #[arg(long, value_parser = parse_date)]
        end: Date,
    },

    /// Occupancy across every premises, limited by the scarcest characteristic
    #[command(visible_alias = "occ")]
    Occupancy {
        /// First day (inclusive)
        #[arg(long, value_parser = parse_date)]
        start: Date,
        /// Last day (inclusive)
        #[arg(long, value_parser = parse_date)]
        end: Date,
        /// Characteristic a placement needs; repeat for several, most important first
        #[arg(long = "characteristic", value_name = "TAG")]
        characteristics: Vec<String>,
    },

    /// Lifecycle status of a premises' current bookings
    #[command(visible_alias = "st")]
    Statuses {
        /// Premises to report on
        #[arg(long)]
        premises: String,
    },

    /// Everything happening at a premises on one day
    Day {
        /// Premises to report on
        #[arg(long)]
        premises: String,
        /// The day to show
        #[arg(long, value_parser = parse_date)]
        date: Date,
    },

    /// One premises in the requested summary shape
    Summary {
        /// Premises to report on
        #[arg(long)]
        premises: String,
        /// Summary shape
        #[arg(long, value_enum, default_value_t = Shape::Full)]
        shape: Shape,
    },

    /// Premises with a bed carrying every requested characteristic
    Search {
        /// Characteristic a single bed must carry; repeat for several
        #[arg(long = "characteristic", value_name = "TAG")]
        characteristics: Vec<String>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json: String = serde_json::to_string_pretty(value).wrap_err("Failed to encode result")?;
    println!("{json}");
    Ok(())
}

impl Command {
    fn run(
        self,
        repository: &InMemoryPremisesRepository,
        config: &ReportingConfig,
        now: OffsetDateTime,
    ) -> Result<()> {
        match self {
            Self::Capacity {
                premises,
                start,
                end,
            } => {
                let request = PremisesCapacityRequest {
                    premises_id: premises,
                    start_date: start,
                    end_date: end,
                };
                print_json(&get_premises_capacity(repository, &request)?)
            }
            Self::Occupancy {
                start,
                end,
                characteristics,
            } => {
                let request = NationalOccupancyRequest {
                    start_date: start,
                    end_date: end,
                    characteristics,
                };
                print_json(&get_national_occupancy(repository, &request)?)
            }
            Self::Statuses { premises } => {
                print_json(&get_booking_statuses(repository, config, &premises, now)?)
            }
            Self::Day { premises, date } => print_json(&get_premises_day_summary(
                repository, config, &premises, date, now,
            )?),
            Self::Summary { premises, shape } => print_json(&get_premises_summary(
                repository,
                config,
                &premises,
                shape.into(),
                now,
            )?),
            Self::Search { characteristics } => {
                let request = PremisesSearchRequest { characteristics };
                print_json(&search_premises(repository, &request)?)
            }
        }
    }
}
