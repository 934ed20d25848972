use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Wraps each field in brackets.
/// Format: [TIMESTAMP] [LEVEL] [TARGET: FILE:LINE]: MESSAGE
///
/// With `with_location(false)` the target block is dropped, which gives the
/// short `[TIMESTAMP] [LEVEL] MESSAGE` form used on the console.
#[derive(Debug, Clone, Copy)]
pub struct BracketedFormatter {
    with_location: bool,
}

impl Default for BracketedFormatter {
    fn default() -> Self {
        Self {
            with_location: true,
        }
    }
}

impl BracketedFormatter {
    pub fn with_location(mut self, enabled: bool) -> Self {
        self.with_location = enabled;
        self
    }
}

impl<S, N> FormatEvent<S, N> for BracketedFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let now = chrono::Local::now();
        write!(writer, "[{}] ", now.format("%Y-%m-%dT%H:%M:%S%.3f"))?;

        write!(writer, "[{}] ", metadata.level())?;

        if self.with_location {
            if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
                write!(writer, "[{}: {}:{}]: ", metadata.target(), file, line)?;
            } else {
                write!(writer, "[{}]: ", metadata.target())?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
