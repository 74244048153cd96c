//! Process logging: stderr plus the append-only log file

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "translator_bot.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Handle to the installed logging pipeline.
///
/// Owned by `main` for the life of the process. Dropping it flushes the log
/// file.
pub struct LogHandle {
    path: PathBuf,
    file: LogFile,
}

impl LogHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LogHandle {
    fn drop(&mut self) {
        let _ = self.file.flush();
    }
}

/// Install the global subscriber: a stderr layer filtered by `RUST_LOG`
/// (default `info`) and an info-level file layer in `<timestamp> - <message>`
/// form.
pub fn init(path: impl Into<PathBuf>) -> io::Result<LogHandle> {
    let path = path.into();
    let file = LogFile::open(&path)?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(
            EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        );

    let file_writer = file.clone();
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(LogLineFormat)
        .with_writer(move || file_writer.clone())
        .with_filter(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    Ok(LogHandle { path, file })
}

/// Shared append-mode handle on the log file
#[derive(Clone)]
struct LogFile(Arc<Mutex<File>>);

impl LogFile {
    fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self(Arc::new(Mutex::new(file))))
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.0.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self.0.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

/// `<timestamp> - <message>`, one line per event
pub struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} - ", Local::now().format(TIMESTAMP_FORMAT))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
