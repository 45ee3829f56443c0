mod logging;
mod render;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ftl_engine::{
    assess_single_duty, classify_rest, classify_rest_after_landing, parse_time_input,
    split_duty_with, ClockTime, Duration, DutyOptions, RestOptions,
};
use serde::Serialize;

use crate::render::Renderer;

#[derive(Parser, Debug)]
#[command(
    name = "ftl",
    version,
    about = "Flight-crew duty and rest calculator",
    long_about = "Computes duty windows, split-duty ceilings and assumed/deemed rest.\n\n\
                  Times are 24-hour local clock times: HH:MM, HHMM, HMM or MM."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Calendar date of the first departure (YYYY-MM-DD); times print as full dates
    #[arg(long, global = true)]
    date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Single duty: report and release times, ceiling status, next departure
    Duty {
        /// First flight departure time
        departure: String,
        /// Last flight arrival time
        arrival: String,
        #[command(flatten)]
        buffers: BufferArgs,
    },
    /// Split duty: ground rest, allowable duty and margin
    Split {
        /// First flight departure time
        first_departure: String,
        /// Landing time before the ground rest
        first_landing: String,
        /// Departure time after the ground rest
        second_departure: String,
        /// Last flight arrival time
        last_arrival: String,
        #[command(flatten)]
        buffers: BufferArgs,
    },
    /// Assumed vs deemed rest, earliest callout and departure
    Rest(RestArgs),
}

#[derive(Args, Debug)]
struct BufferArgs {
    /// Pre-flight report buffer in minutes
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(i64).range(0..=600))]
    pre: i64,

    /// Post-flight debrief buffer in minutes
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(i64).range(0..=600))]
    post: i64,
}

impl BufferArgs {
    fn options(&self) -> DutyOptions {
        DutyOptions {
            pre_flight_buffer: Duration::from_minutes(self.pre),
            post_flight_buffer: Duration::from_minutes(self.post),
        }
    }
}

#[derive(Args, Debug)]
struct RestArgs {
    /// Duty end time
    #[arg(long, conflicts_with = "landing", required_unless_present = "landing")]
    duty_end: Option<String>,

    /// Landing time; duty end defaults to landing + 15 minutes
    #[arg(long)]
    landing: Option<String>,

    /// Duty end overriding landing + 15 minutes
    #[arg(long, requires = "landing")]
    custom_end: Option<String>,

    /// An FTL extension was used: deemed rest +1 hour
    #[arg(long)]
    ftl_extension: bool,

    /// Extended split duty: deemed rest + the split duty's length beyond 14 hours
    #[arg(long, requires = "split_duty_length")]
    split_duty_extension: bool,

    /// Length of the preceding split duty in hours, 0 to 48 (e.g. 15.5)
    #[arg(long)]
    split_duty_length: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let renderer = Renderer::new(cli.date);

    match &cli.command {
        Command::Duty {
            departure,
            arrival,
            buffers,
        } => {
            let [dep, arr] = read_times([("departure", departure), ("arrival", arrival)])?;
            let assessment = assess_single_duty(dep, arr, &buffers.options());
            emit(cli.json, &assessment, || renderer.single_duty(&assessment))
        }
        Command::Split {
            first_departure,
            first_landing,
            second_departure,
            last_arrival,
            buffers,
        } => {
            let [dep1, land1, dep2, arr2] = read_times([
                ("first departure", first_departure),
                ("first landing", first_landing),
                ("second departure", second_departure),
                ("last arrival", last_arrival),
            ])?;
            let result = split_duty_with(dep1, land1, dep2, arr2, &buffers.options());
            if !result.split_eligible {
                tracing::warn!(
                    ground_rest = %result.ground_rest,
                    "ground rest under 6 hours, split-duty extension not applied"
                );
            }
            emit(cli.json, &result, || renderer.split_duty(&result))
        }
        Command::Rest(args) => {
            let options = rest_options(args)?;
            let result = match (&args.duty_end, &args.landing) {
                (Some(end), _) => {
                    let [end] = read_times([("duty end", end)])?;
                    classify_rest(end, &options)
                }
                (None, Some(landing)) => {
                    let [landing] = read_times([("landing", landing)])?;
                    let custom_end = match &args.custom_end {
                        Some(text) => parse_time_input(text).context("invalid custom end")?,
                        None => None,
                    };
                    classify_rest_after_landing(landing, custom_end, &options)
                }
                (None, None) => bail!("missing input: duty end or landing"),
            };
            emit(cli.json, &result, || renderer.rest(&result))
        }
    }
}

/// Parse every required time field; compute nothing unless all are present.
fn read_times<const N: usize>(fields: [(&str, &String); N]) -> Result<[ClockTime; N]> {
    let mut times = [ClockTime::MIDNIGHT; N];
    let mut missing = Vec::new();

    for (slot, (name, text)) in times.iter_mut().zip(fields) {
        match parse_time_input(text).with_context(|| format!("invalid {name}"))? {
            Some(time) => *slot = time,
            None => missing.push(name),
        }
    }

    if !missing.is_empty() {
        bail!("missing input: {}", missing.join(", "));
    }
    Ok(times)
}

/// Longest split duty accepted on the command line, in hours.
const MAX_SPLIT_DUTY_LENGTH_HOURS: f64 = 48.0;

fn rest_options(args: &RestArgs) -> Result<RestOptions> {
    let split_duty_length = match args.split_duty_length {
        Some(hours) if !(0.0..=MAX_SPLIT_DUTY_LENGTH_HOURS).contains(&hours) => {
            bail!("invalid split duty length: {hours} (expected 0 to {MAX_SPLIT_DUTY_LENGTH_HOURS} hours)")
        }
        Some(hours) => Some(Duration::from_hours_f64(hours)),
        None => None,
    };
    Ok(RestOptions {
        ftl_extension: args.ftl_extension,
        split_duty_extension: args.split_duty_extension,
        split_duty_length,
    })
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(value).context("failed to serialize result")?;
        println!("{out}");
    } else {
        println!("{}", text());
    }
    Ok(())
}
