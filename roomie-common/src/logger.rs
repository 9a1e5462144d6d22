use roomie_error::{RMError, RMResult};
use roomie_models::constants::{LOG_DIR, LOG_FILE_PREFIX};
use std::{
    str::FromStr,
    sync::{Arc, Mutex, PoisonError},
};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{filter::DynFilterFn, fmt, layer::SubscriberExt, Layer, Registry};

/// Console plus optional daily-rolling file output, sharing one adjustable level.
pub struct Logger {
    level: Arc<Mutex<Level>>,
    file: bool,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Level, file: bool) -> Self {
        Logger {
            level: Arc::new(Mutex::new(level)),
            file,
            _file_guard: None,
        }
    }

    /// Build from the `log.level` config string.
    pub fn from_config(level: &str, file: bool) -> RMResult<Self> {
        let level = Level::from_str(level.trim())
            .map_err(|_| RMError::ConfigurationError(format!("invalid log level `{level}`")))?;
        Ok(Self::new(level, file))
    }

    #[inline]
    pub fn set_level(&self, new_level: Level) {
        *self.level.lock().unwrap_or_else(PoisonError::into_inner) = new_level;
    }

    #[inline]
    pub fn get_level(&self) -> Level {
        *self.level.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install the global subscriber. Call once, after the working directory is final.
    pub fn initialize(&mut self) -> RMResult<()> {
        let console_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| {
                metadata.level() <= &*level.lock().unwrap_or_else(PoisonError::into_inner)
            })
        };
        let file_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| {
                metadata.level() <= &*level.lock().unwrap_or_else(PoisonError::into_inner)
            })
        };

        let console_layer = {
            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .pretty()
                .with_writer(std::io::stdout)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_file(false)
                .with_line_number(false);

            layer.with_filter(console_filter)
        };

        let file_layer = if self.file {
            let (non_blocking, guard) =
                tracing_appender::non_blocking(rolling::daily(LOG_DIR, LOG_FILE_PREFIX));
            self._file_guard = Some(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_filter(file_filter),
            )
        } else {
            None
        };

        let subscriber = Registry::default().with(console_layer).with(file_layer);
        set_global_default(subscriber).map_err(|_| RMError::from("Failed to set logger"))?;
        Ok(())
    }
}
