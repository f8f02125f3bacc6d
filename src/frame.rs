//! Call-site metadata supplied by the host.
//!
//! The logger never walks the stack itself. A host integration implements
//! [`FrameResolver`] and hands back a [`FrameSnapshot`] for a requested call
//! depth; the logger only reads names off the snapshot. When no frame is
//! available at the requested depth, the snapshot degrades to placeholder
//! text so a bad depth assumption can never take the host down with it.

/// Placeholder shown when the method at the requested depth is unknown.
pub const METHOD_UNAVAILABLE: &str = "[Method info is not available]";

/// Placeholder shown when the declaring class at the requested depth is unknown.
pub const CLASS_UNAVAILABLE: &str = "[Class info is not available]";

/// Resolved metadata for one stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDetails {
    /// Simple method name, e.g. `update`.
    pub method_name: String,
    /// Full method signature, e.g. `fn update(&mut self, dt: f32)`.
    pub method_signature: String,
    /// Simple declaring type name, e.g. `Player`.
    pub class_name: String,
    /// Qualified declaring type name, e.g. `game::actors::Player`.
    pub qualified_class_name: String,
}

/// A frame lookup result captured at log-call time.
///
/// Holds the resolved details, if any, plus the total stack depth observed
/// when the snapshot was taken. Accessors fall back to placeholder strings
/// on an unresolved snapshot instead of failing.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    details: Option<FrameDetails>,
    frame_count: usize,
}

impl FrameSnapshot {
    pub fn resolved(details: FrameDetails, frame_count: usize) -> Self {
        Self {
            details: Some(details),
            frame_count,
        }
    }

    /// A snapshot for a depth with no frame. `frame_count` is still the
    /// total depth of the stack that was inspected.
    pub fn unresolved(frame_count: usize) -> Self {
        Self {
            details: None,
            frame_count,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.details.is_some()
    }

    /// Total stack depth at capture time. Drives line indentation.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn method_name(&self) -> &str {
        self.details
            .as_ref()
            .map(|d| d.method_name.as_str())
            .unwrap_or(METHOD_UNAVAILABLE)
    }

    pub fn method_signature(&self) -> &str {
        self.details
            .as_ref()
            .map(|d| d.method_signature.as_str())
            .unwrap_or(METHOD_UNAVAILABLE)
    }

    pub fn class_name(&self) -> &str {
        self.details
            .as_ref()
            .map(|d| d.class_name.as_str())
            .unwrap_or(CLASS_UNAVAILABLE)
    }

    pub fn qualified_class_name(&self) -> &str {
        self.details
            .as_ref()
            .map(|d| d.qualified_class_name.as_str())
            .unwrap_or(CLASS_UNAVAILABLE)
    }
}

/// Host-supplied capability that maps a call depth to frame metadata.
///
/// Depth 0 is the resolver itself; the logger asks for the depth of the
/// code that invoked a logging entry point, and one level above it for the
/// caller-class decoration.
pub trait FrameResolver: Send {
    fn resolve(&self, depth: usize) -> FrameSnapshot;
}

/// Resolver used when no host integration is present.
///
/// Reports an empty stack, so snapshots degrade to placeholders and lines
/// get no indentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFrames;

impl FrameResolver for NoFrames {
    fn resolve(&self, _depth: usize) -> FrameSnapshot {
        FrameSnapshot::unresolved(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_snapshot_degrades_to_placeholders() {
        let snapshot = FrameSnapshot::unresolved(5);
        assert_eq!(snapshot.method_name(), METHOD_UNAVAILABLE);
        assert_eq!(snapshot.method_signature(), METHOD_UNAVAILABLE);
        assert_eq!(snapshot.class_name(), CLASS_UNAVAILABLE);
        assert_eq!(snapshot.qualified_class_name(), CLASS_UNAVAILABLE);
        assert_eq!(snapshot.frame_count(), 5);
    }

    #[test]
    fn resolved_snapshot_exposes_details() {
        let snapshot = FrameSnapshot::resolved(
            FrameDetails {
                method_name: "update".into(),
                method_signature: "fn update(&mut self)".into(),
                class_name: "Player".into(),
                qualified_class_name: "game::Player".into(),
            },
            3,
        );
        assert!(snapshot.is_resolved());
        assert_eq!(snapshot.method_name(), "update");
        assert_eq!(snapshot.class_name(), "Player");
        assert_eq!(snapshot.qualified_class_name(), "game::Player");
    }

    #[test]
    fn no_frames_reports_empty_stack() {
        let snapshot = NoFrames.resolve(3);
        assert!(!snapshot.is_resolved());
        assert_eq!(snapshot.frame_count(), 0);
    }
}
