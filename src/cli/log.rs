//! Logging setup: stderr via fern, levels driven by -v and --log.

use colored::*;
use log::LevelFilter;
use time::macros::format_description;
use time::OffsetDateTime;

fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    match s {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(format!("unknown log level '{}'", other)),
    }
}

fn colored_level(level: log::Level) -> ColoredString {
    match level {
        log::Level::Error => "ERROR".bright_red(),
        log::Level::Warn => "WARN".yellow(),
        log::Level::Info => "INFO".green(),
        log::Level::Debug => "DEBUG".cyan(),
        log::Level::Trace => "TRACE".dimmed(),
    }
}

/// Configure the global logger.
///
/// `logs` entries are `target` or `target=level` pairs overriding the
/// general verbosity for one module.
pub fn setup(verbose: u8, logs: Vec<&str>, log_time: bool) -> Result<(), String> {
    let mut dispatch = fern::Dispatch::new().level(level_from_verbosity(verbose));

    for spec in logs {
        let (target, level) = match spec.split_once('=') {
            Some((target, level)) => (target, parse_level(level)?),
            None => (spec, LevelFilter::Trace),
        };
        dispatch = dispatch.level_for(target.to_string(), level);
    }

    dispatch = if log_time {
        dispatch.format(|out, message, record| {
            let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
            let timestamp = now
                .format(format_description!(
                    "[hour]:[minute]:[second].[subsecond digits:3]"
                ))
                .unwrap_or_default();
            out.finish(format_args!(
                "{} {} [{}] {}",
                timestamp.dimmed(),
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
    } else {
        dispatch.format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
    };

    dispatch
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| e.to_string())
}
