mod app;
mod help;
mod jumpto;
mod state;
mod theme;
mod widget;
use crate::app::App;
use crate::state::MonthState;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::io;
use std::path::PathBuf;
use time::{Date, OffsetDateTime};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use whalecal::{parse_date_key, CalendarData, LocaleTable, ViewOptions, YearMonth};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct RunOptions {
    month: Option<YearMonth>,
    data: Option<PathBuf>,
    locale: &'static LocaleTable,
    selected: Option<Date>,
    show_today: bool,
    show_adjacent_days: bool,
}

impl Default for RunOptions {
    fn default() -> RunOptions {
        RunOptions {
            month: None,
            data: None,
            locale: LocaleTable::default_locale(),
            selected: None,
            show_today: true,
            show_adjacent_days: true,
        }
    }
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('d') | Arg::Long("data") => {
                    opts.data = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('l') | Arg::Long("locale") => {
                    let value = parser.value()?.string()?;
                    match LocaleTable::for_id(&value) {
                        Ok(locale) => opts.locale = locale,
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                Arg::Short('s') | Arg::Long("select") => {
                    let value = parser.value()?.string()?;
                    match parse_date_key(&value) {
                        Ok(d) => opts.selected = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                Arg::Long("hide-today") => opts.show_today = false,
                Arg::Long("hide-adjacent") => opts.show_adjacent_days = false,
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Value(value) if opts.month.is_none() => {
                    opts.month = Some(value.parse::<YearMonth>()?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let data = if let Some(path) = &opts.data {
                    CalendarData::load(path).with_context(|| {
                        format!("failed to load calendar data from {}", path.display())
                    })?
                } else {
                    CalendarData::new()
                };
                let options = ViewOptions::new(today)
                    .show_today(opts.show_today)
                    .show_adjacent_days(opts.show_adjacent_days)
                    .selected_date(opts.selected)
                    .locale(opts.locale);
                let mut calendar = MonthState::new(options);
                if let Some(month) = opts.month {
                    calendar = calendar.start_month(month);
                }
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(data, calendar).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: whalecal [OPTIONS] [YYYY-MM]");
                println!();
                println!(
                    "Month calendar grid with schedule badges and holiday markers, for the terminal"
                );
                println!();
                println!("Options:");
                println!("  -d, --data FILE          Read schedules & holidays from a JSON file");
                println!("  -l, --locale ID          Language for names: ko (default) or en");
                println!("  -s, --select YYYY-MM-DD  Start with the given date selected");
                println!("      --hide-today         Do not mark today's date");
                println!("      --hide-adjacent      Do not show days of neighboring months");
                println!("  -h, --help               Display this help message and exit");
                println!("  -V, --version            Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "whalecal=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
