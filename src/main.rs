mod app;
mod codec;
mod dates;
mod focus;
mod help;
mod navigator;
mod popover;
mod theme;
mod trigger;
mod views;
use crate::app::App;
use crate::codec::RawValue;
use crate::navigator::{CalendarView, Config, DateNavigator};
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::io;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Options {
    value: Option<String>,
    date_format: String,
    user_format: String,
    months_per_view: u8,
    years_per_view: u8,
    week_start: u8,
    initial_view: CalendarView,
    placeholder: Option<String>,
    close_on_select: bool,
}

impl Default for Options {
    fn default() -> Options {
        let config = Config::default();
        Options {
            value: None,
            date_format: config.date_format,
            user_format: config.user_format,
            months_per_view: config.months_per_view,
            years_per_view: config.years_per_view,
            week_start: config.week_start,
            initial_view: config.initial_view,
            placeholder: None,
            close_on_select: config.close_on_select,
        }
    }
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('f') | Arg::Long("format") => {
                    opts.date_format = parser.value()?.string()?;
                }
                Arg::Short('u') | Arg::Long("user-format") => {
                    opts.user_format = parser.value()?.string()?;
                }
                Arg::Short('m') | Arg::Long("months") => {
                    opts.months_per_view = parser.value()?.parse()?;
                }
                Arg::Long("years") => opts.years_per_view = parser.value()?.parse()?,
                Arg::Short('w') | Arg::Long("week-start") => {
                    opts.week_start = parser.value()?.parse()?;
                }
                Arg::Long("view") => {
                    let value = parser.value()?.string()?;
                    match value.parse::<CalendarView>() {
                        Ok(view) => opts.initial_view = view,
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                Arg::Long("placeholder") => opts.placeholder = Some(parser.value()?.string()?),
                Arg::Long("keep-open") => opts.close_on_select = false,
                Arg::Value(value) if opts.value.is_none() => {
                    opts.value = Some(value.string()?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let config = Config {
                    initial_view: opts.initial_view,
                    months_per_view: opts.months_per_view,
                    years_per_view: opts.years_per_view,
                    week_start: opts.week_start,
                    close_on_select: opts.close_on_select,
                    date_format: opts.date_format,
                    user_format: opts.user_format,
                    placeholder: opts.placeholder,
                    ..Config::default()
                };
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let value = match opts.value {
                    Some(text) => RawValue::Text(text),
                    None => RawValue::Empty,
                };
                let navigator = DateNavigator::new(config, today, &value)
                    .context("invalid configuration")?;
                let selection = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(navigator).run(terminal)
                })?;
                if let Some(value) = selection {
                    println!("{value}");
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: datepick [OPTIONS] [VALUE]");
                println!();
                println!("Interactive terminal date picker with day, month, and year views.");
                println!("The picked date is printed to stdout in the internal format.");
                println!();
                println!("Arguments:");
                println!("  [VALUE]                  Initial date, in the internal format");
                println!();
                println!("Options:");
                println!("  -f, --format <PATTERN>       Internal pattern [default: Y-m-d]");
                println!("  -u, --user-format <PATTERN>  Display pattern [default: F j, Y]");
                println!("  -m, --months <N>             Months shown at once [default: 1]");
                println!("      --years <N>              Years shown in the year view [default: 12]");
                println!("  -w, --week-start <0-6>       First day of the week, from Sunday [default: 0]");
                println!("      --view <day|month|year>  View shown on open [default: day]");
                println!("      --placeholder <TEXT>     Trigger text while nothing is selected");
                println!("      --keep-open              Do not close the picker after selecting");
                println!("  -h, --help                   Display this help message and exit");
                println!("  -V, --version                Show the program version and exit");
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
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let mouse = execute!(io::stdout(), EnableMouseCapture).is_ok();
    let r = func(terminal);
    if mouse {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    r
}
