//! Logger setup: `log` records go to stdout, optionally teed to a file.
//!
//! Progress bars live in the [`MultiProgress`] returned by [`init`]; every
//! log write suspends them so records never land on top of a bar.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use indicatif::{MultiProgress, ProgressDrawTarget};
use log::LevelFilter;

use crate::error::CliError;

/// Copies output to stdout and, with ANSI escapes removed, to a log file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

/// Clears the progress bars around each write and redraws them after.
struct SuspendingWriter {
    bars: MultiProgress,
    inner: Box<dyn Write + Send>,
}

impl Write for SuspendingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.bars.suspend(|| inner.write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Install the global logger and return the bar set it writes around.
///
/// `--quiet` keeps warnings and errors and hides all bars, `--verbose` adds
/// debug records with timestamps. `RUST_LOG` overrides the level.
pub(crate) fn init(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> Result<MultiProgress, CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let bars = if quiet {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    } else {
        MultiProgress::new()
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    let inner: Box<dyn Write + Send> = match logfile {
        Some(path) => Box::new(TeeWriter {
            file: File::create(path)?,
        }),
        None => Box::new(io::stdout()),
    };
    builder.target(env_logger::Target::Pipe(Box::new(SuspendingWriter {
        bars: bars.clone(),
        inner,
    })));

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))?;

    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_pass_through_while_a_bar_is_active() {
        let bars = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        let bar = bars.add(indicatif::ProgressBar::new(3));
        bar.set_position(1);

        let sink = Shared::default();
        let mut writer = SuspendingWriter {
            bars,
            inner: Box::new(sink.clone()),
        };
        writeln!(writer, "line 2: UPGRADE of Emma to eBook").unwrap();

        assert_eq!(
            String::from_utf8(sink.0.lock().unwrap().clone()).unwrap(),
            "line 2: UPGRADE of Emma to eBook\n"
        );
        assert_eq!(bar.position(), 1);
    }
}
