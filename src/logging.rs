use std::io::Write;

use chrono::{DateTime, Utc};
use colored::{Color, ColoredString, Colorize as _};
use env_logger::{Builder, Env};
use log::{Level, LevelFilter, Record};

/// Installs the stderr logger.
///
/// `RUST_LOG` is honoured; `verbose` raises the level to debug and adds the
/// module path to every line.
pub fn init(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter()));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    builder.format(move |f, record| {
        let line = format_line(Utc::now(), record, verbose);
        writeln!(f, "{line}")
    });

    builder.init();
}

const fn default_filter() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

fn format_line(now: DateTime<Utc>, record: &Record, with_target: bool) -> String {
    let (tag, color) = style(record.level());
    let time = now.format("%H:%M:%S").to_string().dimmed();
    let tag: ColoredString = tag.color(color).bold();
    let text = record.args().to_string();

    if with_target {
        format!("{time} {tag} {} {text}", record.target().dimmed())
    } else {
        format!("{time} {tag} {text}")
    }
}

const fn style(level: Level) -> (&'static str, Color) {
    match level {
        Level::Error => ("ERR", Color::Red),
        Level::Warn => ("WRN", Color::Yellow),
        Level::Info => ("INF", Color::Green),
        Level::Debug => ("DBG", Color::Blue),
        Level::Trace => ("TRC", Color::Magenta),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn render(level: Level, with_target: bool) -> String {
        colored::control::set_override(false);
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        format_line(
            now,
            &Record::builder()
                .level(level)
                .target("webhook")
                .args(format_args!("sent"))
                .build(),
            with_target,
        )
    }

    #[test]
    fn plain_line() {
        assert_eq!(render(Level::Info, false), "07:08:09 INF sent");
    }

    #[test]
    fn verbose_line_has_target() {
        assert_eq!(render(Level::Warn, true), "07:08:09 WRN webhook sent");
    }
}
