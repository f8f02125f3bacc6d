//! # File Logger
//!
//! An in-process, buffered message logger: application code emits free-form
//! or call-site-derived messages; the logger filters them by origin and
//! category, decorates them with contextual metadata, buffers them in
//! memory, and flushes them to a file — either immediately in real-time
//! mode or in a single batch on stop.
//!
//! ## Key Features
//!
//! * Growable in-memory line cache with fixed-increment growth, flushed in
//!   one batch or bypassed entirely in real-time mode
//! * Include/exclude/disabled filtering by class and method name, plus a
//!   category bit-set gate
//! * Ordered, independently toggleable line decorations: timestamp,
//!   category tag, stack-depth indentation, class name, method name, object
//!   identity tag, caller class name
//! * Stable identity tags for caller-supplied object references
//! * Host hooks for startup, shutdown, and diagnostic forwarding — no
//!   global state, the host owns the logger instance
//!
//! ## Main Components
//!
//! * [`Logger`]: the controller — state machine, gating, and dispatch
//! * [`MessageCache`]: the append-buffer/flush engine
//! * [`NameFilter`]: the call-site filtering engine
//! * [`compose_line`]: the message-composition pipeline
//! * [`FrameResolver`]: host-supplied call-site metadata seam
//!
//! ## Quick Start
//!
//! ```
//! use file_logger::{log_string, Logger, LoggerConfig};
//!
//! let mut config = LoggerConfig::default();
//! config.display = file_logger::DisplayOptions::TIMESTAMP;
//!
//! let mut logger = Logger::new(config);
//! logger.start("log.txt", false).unwrap();
//!
//! logger.log_string("game started");
//! log_string!(logger, "loaded {} assets", 42);
//!
//! // Batch mode: lines hit the file on stop.
//! logger.stop().unwrap();
//! ```

pub mod compose;
pub mod error;
pub mod filter;
pub mod frame;
pub mod logger;
pub mod message_cache;
pub mod object_registry;
pub mod options;
pub mod timestamp;

pub use compose::{compose_line, ComposeOptions};
pub use error::{LogError, Result};
pub use filter::{FilterMode, NameFilter};
pub use frame::{FrameDetails, FrameResolver, FrameSnapshot, NoFrames};
pub use logger::{ConsoleSink, LogConsole, Logger, LoggerConfig, VERSION};
pub use message_cache::{MessageCache, DEFAULT_CACHE_SIZE};
pub use object_registry::{ObjectIdRegistry, ObjectKey};
pub use options::{Categories, Category, DisplayOptions, MethodKinds};
