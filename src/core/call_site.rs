//! Call-site attribution
//!
//! Lines are annotated with the `file:line` of the first frame that lies
//! outside this library's own source tree. Frames are supplied by a
//! [`FrameInspector`]; the default [`TrackedFrames`] carries the caller's
//! location captured through `#[track_caller]`, since std exposes no stable
//! per-frame file/line API.

use std::fmt;
use std::panic::Location;

/// First depth inspected; depths 0 and 1 are the resolver and the dispatch site.
pub const START_DEPTH: usize = 2;

/// Depth at which the scan gives up.
pub const MAX_DEPTH: usize = 15;

/// Frames in files with this suffix are always attributed, even inside the library tree.
pub const TEST_FILE_SUFFIX: &str = "_tests.rs";

/// A resolved source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Source of stack frames, indexed outward from the resolver (depth 0).
pub trait FrameInspector {
    fn frame(&self, depth: usize) -> Option<CallSite>;
}

/// Frame list assembled from `#[track_caller]` locations.
#[derive(Debug, Clone)]
pub struct TrackedFrames {
    frames: Vec<&'static Location<'static>>,
}

impl TrackedFrames {
    /// `dispatch` is the library-internal site that rendered the line,
    /// `caller` the user's call captured by `#[track_caller]`.
    pub fn new(dispatch: &'static Location<'static>, caller: &'static Location<'static>) -> Self {
        Self {
            frames: vec![Location::caller(), dispatch, caller],
        }
    }
}

impl FrameInspector for TrackedFrames {
    fn frame(&self, depth: usize) -> Option<CallSite> {
        self.frames.get(depth).map(|location| CallSite::from(*location))
    }
}

impl FrameInspector for [CallSite] {
    fn frame(&self, depth: usize) -> Option<CallSite> {
        self.get(depth).cloned()
    }
}

impl FrameInspector for Vec<CallSite> {
    fn frame(&self, depth: usize) -> Option<CallSite> {
        self.get(depth).cloned()
    }
}

/// Finds the first frame outside the library root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSiteResolver {
    anchor: String,
}

impl CallSiteResolver {
    /// Resolver anchored at the library's source root, derived from this
    /// file's own path with `core/call_site.rs` stripped.
    pub fn new() -> Self {
        let own = file!();
        let anchor = own
            .rsplitn(3, ['/', '\\'])
            .nth(2)
            .map(|root| &own[..root.len() + 1])
            .unwrap_or_default();
        Self::with_anchor(anchor)
    }

    /// Resolver anchored at an explicit library root.
    pub fn with_anchor(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
        }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Whether `file` counts as a caller rather than library code
    pub fn is_external(&self, file: &str) -> bool {
        self.anchor.is_empty() || !file.starts_with(&self.anchor) || file.ends_with(TEST_FILE_SUFFIX)
    }

    /// `"file:line"` of the first qualifying frame, or an empty string.
    pub fn resolve<F: FrameInspector + ?Sized>(&self, frames: &F) -> String {
        (START_DEPTH..MAX_DEPTH)
            .filter_map(|depth| frames.frame(depth))
            .find(|site| self.is_external(&site.file))
            .map(|site| site.to_string())
            .unwrap_or_default()
    }
}

impl Default for CallSiteResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep only the final path segment of a `file:line` string.
pub fn short_path(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lib_frames(callers: &[(&str, u32)]) -> Vec<CallSite> {
        let mut frames = vec![
            CallSite::new("lib/src/core/call_site.rs", 10),
            CallSite::new("lib/src/core/renderer.rs", 20),
        ];
        frames.extend(callers.iter().map(|(f, l)| CallSite::new(*f, *l)));
        frames
    }

    #[test]
    fn test_anchor_is_own_directory() {
        let resolver = CallSiteResolver::new();
        let anchor = resolver.anchor();
        assert!(file!().starts_with(anchor));
        assert!(anchor.ends_with("src/") || anchor.ends_with("src\\"));
        assert!(!resolver.is_external(file!()));
        assert!(resolver.is_external("tests/integration_tests.rs"));
    }

    #[test]
    fn test_skips_library_frames() {
        let resolver = CallSiteResolver::with_anchor("lib/src/");
        let frames = lib_frames(&[("lib/src/core/entry.rs", 30), ("app/src/main.rs", 42)]);
        assert_eq!(resolver.resolve(&frames), "app/src/main.rs:42");
    }

    #[test]
    fn test_starts_at_depth_two() {
        let resolver = CallSiteResolver::with_anchor("lib/src/");
        let frames = vec![
            CallSite::new("app/src/zero.rs", 1),
            CallSite::new("app/src/one.rs", 2),
            CallSite::new("app/src/two.rs", 3),
        ];
        assert_eq!(resolver.resolve(&frames), "app/src/two.rs:3");
    }

    #[test]
    fn test_test_suffix_inside_library_is_attributed() {
        let resolver = CallSiteResolver::with_anchor("lib/src/");
        let frames = lib_frames(&[("lib/src/core/entry_tests.rs", 7)]);
        assert_eq!(resolver.resolve(&frames), "lib/src/core/entry_tests.rs:7");
    }

    #[test]
    fn test_gives_up_after_max_depth() {
        let resolver = CallSiteResolver::with_anchor("lib/src/");
        let mut frames: Vec<CallSite> = (0..MAX_DEPTH)
            .map(|i| CallSite::new("lib/src/deep.rs", i as u32))
            .collect();
        frames.push(CallSite::new("app/src/main.rs", 99));
        assert_eq!(resolver.resolve(&frames), "");
    }

    #[test]
    fn test_no_frames_resolves_empty() {
        let resolver = CallSiteResolver::with_anchor("lib/src/");
        let frames: Vec<CallSite> = Vec::new();
        assert_eq!(resolver.resolve(&frames), "");
    }

    #[test]
    fn test_tracked_frames_layout() {
        let dispatch = Location::caller();
        let caller = Location::caller();
        let frames = TrackedFrames::new(dispatch, caller);

        assert_eq!(frames.frame(0).map(|f| f.file), Some(file!().to_string()));
        assert_eq!(frames.frame(2), Some(CallSite::from(caller)));
        assert_eq!(frames.frame(3), None);
    }

    #[test]
    fn test_short_path() {
        assert_eq!(short_path("app/src/main.rs:42"), "main.rs:42");
        assert_eq!(short_path(r"C:\app\src\main.rs:42"), "main.rs:42");
        assert_eq!(short_path("main.rs:1"), "main.rs:1");
        assert_eq!(short_path(""), "");
    }
}
