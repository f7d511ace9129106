//! Log line formatter that stamps each event with the wall clock and the game tick.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Ticks since startup, advanced once per frame by the app loop.
static TICK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The tick is shown as four hex digits and wraps.
const TICK_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// `HH:MM:SS.mmm 0xTICK LEVEL target: fields`, dimmed and coloured when the writer supports ANSI.
pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        let tick = get_tick_count() & TICK_DISPLAY_MASK;
        if ansi {
            write!(writer, "\x1b[2m{timestamp} 0x{tick:04X}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} 0x{tick:04X} ")?;
        }

        write_level(&mut writer, meta.level(), ansi)?;

        if ansi {
            write!(writer, " \x1b[2m{}:\x1b[0m ", meta.target())?;
        } else {
            write!(writer, " {}: ", meta.target())?;
        }

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn write_level(writer: &mut Writer<'_>, level: &Level, ansi: bool) -> fmt::Result {
    let (color, text) = match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", " INFO"),
        Level::WARN => ("\x1b[33m", " WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    };
    if ansi {
        write!(writer, "{color}{text}\x1b[0m")
    } else {
        write!(writer, "{text}")
    }
}

/// Advance the tick counter by one; called once per frame.
pub fn increment_tick() {
    TICK_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn get_tick_count() -> u64 {
    TICK_COUNTER.load(Ordering::Relaxed)
}
