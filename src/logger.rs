//! The logger controller: state machine, gating, and dispatch.

use std::fmt;
use std::path::PathBuf;

use log::{error, info, warn};

use crate::compose::{compose_line, ComposeOptions};
use crate::error::Result;
use crate::filter::NameFilter;
use crate::frame::{FrameResolver, FrameSnapshot, NoFrames};
use crate::message_cache::{MessageCache, DEFAULT_CACHE_SIZE};
use crate::object_registry::{ObjectIdRegistry, ObjectKey};
use crate::options::{Categories, Category, DisplayOptions, MethodKinds};

/// Crate version, as recorded in the manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stack depth of the code that invoked a logging entry point.
const CALL_SITE_FRAME: usize = 3;
/// Stack depth of that code's own caller.
const CALLER_FRAME: usize = 4;

/// Output capability for echoing finished lines to a diagnostic console.
pub trait ConsoleSink: Send {
    fn print_line(&self, line: &str);
}

/// Default echo sink; forwards lines to the `log` facade so the host's
/// log backend decides where they end up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogConsole;

impl ConsoleSink for LogConsole {
    fn print_line(&self, line: &str) {
        info!(target: "file_logger::echo", "{line}");
    }
}

/// Configuration surface of a [`Logger`].
///
/// Read on every call; mutable between calls through
/// [`Logger::config_mut`]. The master enabled switch is *not* part of the
/// config because toggling it has transition side effects — see
/// [`Logger::set_logging_enabled`].
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Target log file.
    pub file_path: PathBuf,
    /// Append to the file on flush instead of overwriting it.
    pub append: bool,
    /// Master file-output switch; with this off, lines still buffer and echo.
    pub write_to_file: bool,
    /// Write each line to the file as it is logged instead of buffering.
    pub write_in_real_time: bool,
    /// Echo every accepted line to the console sink, in either mode.
    pub echo_to_console: bool,
    /// Force the logger on when the host starts.
    pub enable_on_start: bool,
    /// Clear the log file when `enable_on_start` kicks in.
    pub clear_on_start: bool,
    /// Accept host diagnostic messages via [`Logger::handle_host_message`].
    pub forward_host_messages: bool,
    /// Indent lines by stack depth.
    pub indent_message: bool,
    /// Decorate with qualified rather than simple class names.
    pub qualified_class_name: bool,
    /// Initial cache capacity and growth increment, in lines.
    pub init_cache_size: usize,
    pub display: DisplayOptions,
    pub enabled_methods: MethodKinds,
    pub enabled_categories: Categories,
    pub class_filter: NameFilter,
    pub method_filter: NameFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("log.txt"),
            append: false,
            write_to_file: true,
            write_in_real_time: false,
            echo_to_console: false,
            enable_on_start: false,
            clear_on_start: true,
            forward_host_messages: true,
            indent_message: true,
            qualified_class_name: true,
            init_cache_size: DEFAULT_CACHE_SIZE,
            display: DisplayOptions::default(),
            enabled_methods: MethodKinds::default(),
            enabled_categories: Categories::default(),
            class_filter: NameFilter::default(),
            method_filter: NameFilter::default(),
        }
    }
}

/// Raw message content of one log call, rendered only after every gate has
/// passed.
enum Payload<'a> {
    /// The call site's own signature (`log_call`).
    CallSignature,
    /// `[RESULT: {value}]` (`log_result`).
    ResultOf(&'a dyn fmt::Display),
    /// Caller-supplied text (`log_string`).
    Text(&'a str),
    /// Full stack walk, one frame per line (`log_stack_trace`).
    StackTrace,
}

/// Buffered, filtered message logger.
///
/// Dispatches every enabled log call through the filter engine and the
/// message composer into the cache, or straight to the file in real-time
/// mode. Explicitly constructed and explicitly passed — a host that wants a
/// process-wide logger owns one in its own context object.
///
/// Designed for a single logical writer: entry points take `&mut self` and
/// the host's main loop is expected to call them synchronously.
///
/// # Examples
///
/// ```
/// use file_logger::{Logger, LoggerConfig};
///
/// let mut config = LoggerConfig::default();
/// config.display = file_logger::DisplayOptions::empty();
/// config.indent_message = false;
///
/// let mut logger = Logger::new(config);
/// logger.start("session.log", false).unwrap();
/// logger.log_string("level loaded");
/// logger.stop().unwrap();
/// ```
pub struct Logger {
    config: LoggerConfig,
    logging_enabled: bool,
    cache: MessageCache,
    object_ids: ObjectIdRegistry,
    resolver: Box<dyn FrameResolver>,
    console: Box<dyn ConsoleSink>,
    state_listeners: Vec<Box<dyn Fn(bool) + Send>>,
}

impl Logger {
    /// A logger with no host integration: frames degrade to placeholders and
    /// echo goes to the `log` facade.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_resolver(config, NoFrames)
    }

    /// A logger wired to a host-supplied frame resolver.
    pub fn with_resolver(config: LoggerConfig, resolver: impl FrameResolver + 'static) -> Self {
        let cache = MessageCache::new(config.init_cache_size);
        Self {
            config,
            logging_enabled: false,
            cache,
            object_ids: ObjectIdRegistry::new(),
            resolver: Box::new(resolver),
            console: Box::new(LogConsole),
            state_listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LoggerConfig {
        &mut self.config
    }

    /// The message cache, for inspection and write-event subscription.
    pub fn cache(&self) -> &MessageCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut MessageCache {
        &mut self.cache
    }

    pub fn logging_enabled(&self) -> bool {
        self.logging_enabled
    }

    pub fn set_console_sink(&mut self, sink: impl ConsoleSink + 'static) {
        self.console = Box::new(sink);
    }

    pub fn set_frame_resolver(&mut self, resolver: impl FrameResolver + 'static) {
        self.resolver = Box::new(resolver);
    }

    /// Registers a listener fired with the new enabled value on every real
    /// state transition.
    pub fn on_state_changed(&mut self, listener: impl Fn(bool) + Send + 'static) {
        self.state_listeners.push(Box::new(listener));
    }

    // ---- state machine ----

    /// Flips the master switch.
    ///
    /// Setting the current value again is a no-op: no state-change
    /// notification fires and no flush side effect runs. Turning the logger
    /// off flushes the cache to the file unless real-time mode already wrote
    /// everything, surfacing any I/O failure to the caller while leaving the
    /// buffer intact.
    pub fn set_logging_enabled(&mut self, value: bool) -> Result<()> {
        let previous = self.logging_enabled;
        self.logging_enabled = value;
        if previous == value {
            return Ok(());
        }
        self.notify_state_changed(value);
        self.handle_logging_toggled(value)
    }

    /// Starts logging to `path`, overwriting or appending per `append`.
    pub fn start(&mut self, path: impl Into<PathBuf>, append: bool) -> Result<()> {
        self.config.file_path = path.into();
        self.config.append = append;
        self.set_logging_enabled(true)
    }

    /// Stops logging; in batch mode this flushes the cache to the file.
    ///
    /// Calling `stop` on an already-stopped logger does nothing.
    pub fn stop(&mut self) -> Result<()> {
        self.set_logging_enabled(false)
    }

    /// Truncates the log file to a single empty line.
    pub fn clear_log_file(&self) -> Result<()> {
        self.cache.clear_file(&self.config.file_path)
    }

    // ---- host hooks ----

    /// Host startup hook: applies enable-on-start and clear-on-start.
    pub fn on_host_start(&mut self) -> Result<()> {
        if !self.config.enable_on_start {
            return Ok(());
        }
        if self.config.write_to_file && self.config.clear_on_start {
            self.clear_log_file()?;
        }
        self.set_logging_enabled(true)
    }

    /// Host teardown hook: flushes buffered messages that real-time mode
    /// would otherwise leave stranded in memory.
    pub fn on_host_shutdown(&mut self) -> Result<()> {
        if self.config.write_in_real_time || self.cache.is_empty() {
            return Ok(());
        }
        self.cache
            .flush_all(&self.config.file_path, self.config.append)
            .map(|_| ())
    }

    /// Forwards a host diagnostic message into the log under the `Host`
    /// category.
    pub fn handle_host_message(&mut self, message: &str) {
        if !self.config.forward_host_messages {
            return;
        }
        self.log_string_in(Category::Host, message);
    }

    // ---- logging entry points ----

    /// Logs the current method's signature.
    pub fn log_call(&mut self) {
        self.dispatch(MethodKinds::CALL, Category::Generic, None, Payload::CallSignature);
    }

    pub fn log_call_in(&mut self, category: Category) {
        self.dispatch(MethodKinds::CALL, category, None, Payload::CallSignature);
    }

    /// Like [`Logger::log_call`], tagging the line with the identity of
    /// `object`.
    pub fn log_call_for<T: ?Sized>(&mut self, category: Category, object: &T) {
        let key = ObjectKey::of(object);
        self.dispatch(MethodKinds::CALL, category, Some(key), Payload::CallSignature);
    }

    /// Logs `[RESULT: {result}]`.
    pub fn log_result(&mut self, result: impl fmt::Display) {
        self.dispatch(MethodKinds::RESULT, Category::Generic, None, Payload::ResultOf(&result));
    }

    pub fn log_result_in(&mut self, category: Category, result: impl fmt::Display) {
        self.dispatch(MethodKinds::RESULT, category, None, Payload::ResultOf(&result));
    }

    pub fn log_result_for<T: ?Sized>(
        &mut self,
        category: Category,
        object: &T,
        result: impl fmt::Display,
    ) {
        let key = ObjectKey::of(object);
        self.dispatch(MethodKinds::RESULT, category, Some(key), Payload::ResultOf(&result));
    }

    /// Logs caller-supplied text. See also the [`log_string!`] macro for
    /// format-string sugar.
    ///
    /// [`log_string!`]: crate::log_string
    pub fn log_string(&mut self, message: &str) {
        self.dispatch(MethodKinds::STRING, Category::Generic, None, Payload::Text(message));
    }

    pub fn log_string_in(&mut self, category: Category, message: &str) {
        self.dispatch(MethodKinds::STRING, category, None, Payload::Text(message));
    }

    pub fn log_string_for<T: ?Sized>(&mut self, category: Category, object: &T, message: &str) {
        let key = ObjectKey::of(object);
        self.dispatch(MethodKinds::STRING, category, Some(key), Payload::Text(message));
    }

    /// Logs the full current call stack, one frame per line with
    /// depth-proportional indentation. No other decorations apply.
    pub fn log_stack_trace(&mut self) {
        self.dispatch(MethodKinds::STACK_TRACE, Category::Generic, None, Payload::StackTrace);
    }

    // ---- dispatch ----

    /// Gate sequence shared by every entry point: method kind enabled,
    /// controller running, category enabled, class filter, method filter.
    /// Short-circuits on the first failing gate; nothing is composed and no
    /// side effect happens unless all five pass.
    fn dispatch(
        &mut self,
        kind: MethodKinds,
        category: Category,
        object_key: Option<ObjectKey>,
        payload: Payload<'_>,
    ) {
        if !self.config.enabled_methods.contains(kind) {
            return;
        }
        if !self.logging_enabled {
            return;
        }
        if !self.config.enabled_categories.contains(category.flag()) {
            return;
        }

        let frame = self.capture_frame(CALL_SITE_FRAME);
        if !self.config.class_filter.passes(frame.class_name()) {
            return;
        }
        if !self.config.method_filter.passes(frame.method_name()) {
            return;
        }

        let decorate = !matches!(payload, Payload::StackTrace);
        let text = match payload {
            Payload::CallSignature => frame.method_signature().to_string(),
            Payload::ResultOf(result) => format!("[RESULT: {result}]"),
            Payload::Text(message) => message.to_string(),
            Payload::StackTrace => self.render_stack_trace(),
        };

        let object_id = object_key.map(|key| self.object_ids.id_for(key).0);
        let caller = if decorate && self.config.display.contains(DisplayOptions::CALLER_CLASS) {
            Some(self.capture_frame(CALLER_FRAME))
        } else {
            None
        };
        let options = if decorate {
            ComposeOptions {
                display: self.config.display,
                indent: self.config.indent_message,
                qualified_class_name: self.config.qualified_class_name,
            }
        } else {
            ComposeOptions::plain()
        };

        let line = compose_line(&text, &frame, caller.as_ref(), object_id, category, &options);
        self.deliver(line);
    }

    /// Routes a finished line to the console and to the file or cache.
    fn deliver(&mut self, line: String) {
        if self.config.echo_to_console {
            self.console.print_line(&line);
        }
        if self.config.write_in_real_time {
            if self.config.write_to_file {
                if let Err(err) = self.cache.write_single(&line, &self.config.file_path, true) {
                    error!("real-time log write failed: {err}");
                }
            }
        } else {
            self.cache.add(line);
        }
    }

    fn capture_frame(&self, depth: usize) -> FrameSnapshot {
        let snapshot = self.resolver.resolve(depth);
        if !snapshot.is_resolved() && snapshot.frame_count() > 0 {
            warn!(
                "no stack frame at depth {depth} (stack depth {})",
                snapshot.frame_count()
            );
        }
        snapshot
    }

    fn render_stack_trace(&self) -> String {
        let total = self.resolver.resolve(0).frame_count();
        let mut trace = String::new();
        for depth in 1..total {
            let frame = self.resolver.resolve(depth);
            for _ in 0..depth {
                trace.push_str("| ");
            }
            trace.push_str(frame.method_signature());
            if depth + 1 < total {
                trace.push('\n');
            }
        }
        trace
    }

    fn notify_state_changed(&self, enabled: bool) {
        for listener in &self.state_listeners {
            listener(enabled);
        }
    }

    /// Stop-side flush: when the logger turns off in batch mode, cached
    /// messages go to the file. Real-time mode already wrote them.
    fn handle_logging_toggled(&mut self, enabled: bool) -> Result<()> {
        if enabled || !self.config.write_to_file || self.config.write_in_real_time {
            return Ok(());
        }
        match self
            .cache
            .flush_all(&self.config.file_path, self.config.append)
        {
            Ok(_) => Ok(()),
            Err(err) => {
                error!("flush on stop failed: {err}");
                Err(err)
            }
        }
    }
}

/// Formats and logs a string message through a [`Logger`].
///
/// ```
/// use file_logger::{log_string, Category, Logger, LoggerConfig};
///
/// let mut logger = Logger::new(LoggerConfig::default());
/// log_string!(logger, "spawned {} actors", 3);
/// log_string!(logger, Category::Network, "peer {} connected", "10.0.0.2");
/// ```
#[macro_export]
macro_rules! log_string {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.log_string(&format!($fmt $(, $arg)*))
    };
    ($logger:expr, $category:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.log_string_in($category, &format!($fmt $(, $arg)*))
    };
}
