//! Flag sets controlling what gets logged and how lines are decorated.

use bitflags::bitflags;

bitflags! {
    /// Selects which pieces of call-site metadata are appended to a log line.
    ///
    /// Every flag is independent; the composer applies enabled decorations in
    /// a fixed order regardless of the order flags were set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DisplayOptions: u8 {
        /// `[H:mm:ss:fff]` wall-clock timestamp of composition time.
        const TIMESTAMP = 1 << 0;
        /// `, @ ClassName` of the logging call site.
        const SOURCE_CLASS = 1 << 1;
        /// `.MethodName` of the logging call site.
        const METHOD_NAME = 1 << 2;
        /// `, <- CallerClassName` one stack level above the call site.
        const CALLER_CLASS = 1 << 3;
        /// `[Category]` tag of the message.
        const CATEGORY = 1 << 4;
    }
}

bitflags! {
    /// Gates the logging entry points independently of the master switch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MethodKinds: u8 {
        const CALL = 1 << 0;
        const RESULT = 1 << 1;
        const STRING = 1 << 2;
        const STACK_TRACE = 1 << 3;
    }
}

bitflags! {
    /// Set of message categories accepted by the logger.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Categories: u8 {
        const GENERIC = 1 << 0;
        const NETWORK = 1 << 1;
        const PHYSICS = 1 << 2;
        const UI = 1 << 3;
        const HOST = 1 << 4;
        const COMMAND = 1 << 5;
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions::all()
    }
}

impl Default for MethodKinds {
    fn default() -> Self {
        MethodKinds::all()
    }
}

impl Default for Categories {
    fn default() -> Self {
        Categories::all()
    }
}

/// Category tag carried by a single log message.
///
/// Classifies the message by subsystem, independent of the class/method name
/// filters. A message passes the category gate when its bit is present in the
/// controller's enabled [`Categories`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Generic,
    Network,
    Physics,
    Ui,
    Host,
    Command,
}

impl Category {
    /// The bit this category occupies in a [`Categories`] set.
    pub fn flag(self) -> Categories {
        match self {
            Category::Generic => Categories::GENERIC,
            Category::Network => Categories::NETWORK,
            Category::Physics => Categories::PHYSICS,
            Category::Ui => Categories::UI,
            Category::Host => Categories::HOST,
            Category::Command => Categories::COMMAND,
        }
    }

    /// Name used for the `[Category]` line decoration.
    pub fn label(self) -> &'static str {
        match self {
            Category::Generic => "Generic",
            Category::Network => "Network",
            Category::Physics => "Physics",
            Category::Ui => "UI",
            Category::Host => "Host",
            Category::Command => "Command",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        assert_eq!(DisplayOptions::default(), DisplayOptions::all());
        assert_eq!(MethodKinds::default(), MethodKinds::all());
        assert_eq!(Categories::default(), Categories::all());
    }

    #[test]
    fn category_flags_are_distinct() {
        let all = [
            Category::Generic,
            Category::Network,
            Category::Physics,
            Category::Ui,
            Category::Host,
            Category::Command,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!((a.flag() & b.flag()).is_empty());
            }
        }
    }

    #[test]
    fn category_gate_is_bit_intersection() {
        let enabled = Categories::GENERIC | Categories::NETWORK;
        assert!(enabled.contains(Category::Network.flag()));
        assert!(!enabled.contains(Category::Physics.flag()));
    }
}
