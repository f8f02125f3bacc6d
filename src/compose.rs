//! Builds one output line from a raw payload and call-site metadata.
//!
//! Decorations apply in a fixed order, each independently skippable:
//! timestamp, category tag, indentation, payload, source class, method name,
//! object identity tag, caller class. The order and separators are part of
//! the output contract — tools that parse log files rely on them.

use crate::frame::FrameSnapshot;
use crate::options::{Category, DisplayOptions};
use crate::timestamp;

/// Per-line composition settings, read on every composed line.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    pub display: DisplayOptions,
    /// Repeat one `"| "` token per stack frame before the payload.
    pub indent: bool,
    /// Use the qualified class name for source and caller decorations.
    pub qualified_class_name: bool,
}

impl ComposeOptions {
    /// No decorations at all. Used for stack-trace output, which carries its
    /// own per-frame indentation inside the payload.
    pub fn plain() -> Self {
        Self {
            display: DisplayOptions::empty(),
            indent: false,
            qualified_class_name: false,
        }
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            display: DisplayOptions::all(),
            indent: true,
            qualified_class_name: true,
        }
    }
}

/// Renders one finished log line.
///
/// `caller` is the frame one level above the call site; it is only consulted
/// when the caller-class decoration is enabled. `object_id` decorates the
/// line whenever the call supplied an object reference, independent of the
/// display flags.
///
/// Indentation depth is the total stack depth at capture time, not nesting
/// relative to the logger call. Deep host call stacks therefore produce deep
/// indentation; redefining this as relative depth would change every
/// existing log consumer.
pub fn compose_line(
    payload: &str,
    frame: &FrameSnapshot,
    caller: Option<&FrameSnapshot>,
    object_id: Option<u64>,
    category: Category,
    options: &ComposeOptions,
) -> String {
    let mut line = String::new();

    if options.display.contains(DisplayOptions::TIMESTAMP) {
        line.push_str(&timestamp::current_timestamp());
        line.push(' ');
    }

    if options.display.contains(DisplayOptions::CATEGORY) {
        line.push('[');
        line.push_str(category.label());
        line.push_str("] ");
    }

    if options.indent {
        for _ in 0..frame.frame_count() {
            line.push_str("| ");
        }
    }

    line.push_str(payload);

    if options.display.contains(DisplayOptions::SOURCE_CLASS) {
        line.push_str(", @ ");
        line.push_str(class_name(frame, options));
    }

    if options.display.contains(DisplayOptions::METHOD_NAME) {
        line.push('.');
        line.push_str(frame.method_name());
    }

    if let Some(id) = object_id {
        line.push_str(&format!(" (GUID: {id})"));
    }

    if options.display.contains(DisplayOptions::CALLER_CLASS) {
        if let Some(caller) = caller {
            line.push_str(", <- ");
            line.push_str(class_name(caller, options));
        }
    }

    line
}

fn class_name<'a>(frame: &'a FrameSnapshot, options: &ComposeOptions) -> &'a str {
    if options.qualified_class_name {
        frame.qualified_class_name()
    } else {
        frame.class_name()
    }
}
