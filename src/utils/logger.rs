/// Logging setup and the crate's print macros
///
/// The macros keep their historical names but emit `tracing` events through
/// `dioxus::logger`, which is the subscriber Dioxus wires up on web (browser
/// console) and desktop (stdout).
use dioxus::logger::tracing::Level;

/// Environment variable holding the native log level
pub const LOG_ENV: &str = "WPDIR_LOG";

fn default_level() -> Level {
    if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO }
}

/// Level requested through `WPDIR_LOG`, falling back to the build default
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub fn level_from(value: Option<&str>) -> Level {
    value
        .and_then(|raw| raw.trim().parse::<Level>().ok())
        .unwrap_or_else(default_level)
}

/// Install the global subscriber before launch. Safe to call more than once.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    #[cfg(target_arch = "wasm32")]
    let level = default_level();

    if dioxus::logger::tracing::dispatcher::has_been_set() {
        return;
    }
    match dioxus::logger::init(level) {
        Ok(()) => {
            dioxus::logger::tracing::debug!("🐛 Logging initialised at {}", level);
        }
        Err(e) => {
            eprintln!("❌ Failed to install logger: {}", e);
        }
    }
}

/// Debug print macro - diagnostics that are only useful while developing
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        dioxus::logger::tracing::debug!($($arg)*)
    };
}

/// Debug error print macro - recoverable problems worth a warning
#[macro_export]
macro_rules! debug_eprint {
    ($($arg:tt)*) => {
        dioxus::logger::tracing::warn!($($arg)*)
    };
}

/// Always print macro - for messages that should always show
#[macro_export]
macro_rules! always_print {
    ($($arg:tt)*) => {
        dioxus::logger::tracing::info!($($arg)*)
    };
}

/// Always error print macro - for swallowed errors that must still be visible
#[macro_export]
macro_rules! always_eprint {
    ($($arg:tt)*) => {
        dioxus::logger::tracing::error!($($arg)*)
    };
}

/// Subscriber that records the level of every event, for asserting on log output
#[cfg(test)]
pub mod recorder {
    use dioxus::logger::tracing::span::{ Attributes, Id, Record };
    use dioxus::logger::tracing::{ Event, Level, Metadata, Subscriber };
    use std::sync::{ Arc, Mutex };

    #[derive(Clone, Default)]
    pub struct LevelRecorder {
        levels: Arc<Mutex<Vec<Level>>>,
    }

    impl LevelRecorder {
        pub fn levels(&self) -> Vec<Level> {
            self.levels.lock().unwrap().clone()
        }
    }

    impl Subscriber for LevelRecorder {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }
        fn record(&self, _: &Id, _: &Record<'_>) {}
        fn record_follows_from(&self, _: &Id, _: &Id) {}
        fn event(&self, event: &Event<'_>) {
            self.levels.lock().unwrap().push(*event.metadata().level());
        }
        fn enter(&self, _: &Id) {}
        fn exit(&self, _: &Id) {}
    }
}
