use anyhow::{Context, Result};
use barroute::{CyclePolicy, SearchConfig};
use barroute_cases::{
    build_cases, read_cases, read_search_config, save_report, Report, ReportFormat, ReportOptions,
};
use clap::{value_t_or_exit, App, Arg, ArgMatches};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(verbosity: u64) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn search_config(matches: &ArgMatches) -> Result<SearchConfig> {
    let mut config = match matches.value_of("config") {
        Some(path) => read_search_config(path)
            .with_context(|| format!("failed to load search settings from {}", path))?,
        None => SearchConfig::default(),
    };
    if matches.is_present("max-depth") {
        config = config.with_max_depth(value_t_or_exit!(matches, "max-depth", usize));
    }
    if matches.is_present("follow-cycles") {
        config = config.with_cycles(CyclePolicy::Follow);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let matches = App::new("barroute-cases")
        .about("Finds the cheapest delivery of bars for every case of an input file")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .required(true)
                .help("Tab separated file with the cases"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(true)
                .help("File receiving the total of every case"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .takes_value(true)
                .help("JSON file with search settings, overridden by the flags below"),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .help("Longest path, in locations, before a case is given up"),
        )
        .arg(
            Arg::with_name("follow-cycles")
                .long("follow-cycles")
                .help("Let paths revisit locations, bounded by --max-depth (default 1024)"),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .takes_value(true)
                .possible_values(&["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::with_name("legacy-sentinel")
                .long("legacy-sentinel")
                .help("Write 9999 for unreachable cases"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log every candidate path (-v) or everything (-vv)"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let input = value_t_or_exit!(matches, "input", String);
    let output = value_t_or_exit!(matches, "output", String);
    let config = search_config(&matches)?;
    let options = ReportOptions {
        format: value_t_or_exit!(matches, "format", ReportFormat),
        legacy_sentinel: matches.is_present("legacy-sentinel"),
    };

    let timer = Instant::now();

    let raw_cases =
        read_cases(&input).with_context(|| format!("failed to read cases from {}", input))?;

    let report = Report::evaluate(build_cases(&raw_cases), &config);

    save_report(&report, &output, &options)
        .with_context(|| format!("failed to write results to {}", output))?;

    info!(
        "{} in {:.2} seconds",
        report.summary(),
        timer.elapsed().as_secs_f32()
    );

    Ok(())
}
