//! Stack reconciliation
//!
//! The host stack of a failed script call points at transport internals. The
//! reconciled stack reads top-down as "failed in the script at this line,
//! invoked from this library call, invoked from your code".

/// Decides whether a frame belongs to the locking library itself
pub trait FrameMatcher {
    fn is_library_frame(&self, frame: &str) -> bool;
}

impl<F> FrameMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn is_library_frame(&self, frame: &str) -> bool {
        self(frame)
    }
}

/// Matches frames whose file path contains the library's installation root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryRoot {
    root: String,
}

impl LibraryRoot {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.root
    }
}

impl FrameMatcher for LibraryRoot {
    fn is_library_frame(&self, frame: &str) -> bool {
        // An empty root would claim every frame
        !self.root.is_empty() && frame_path(frame).contains(self.root.as_str())
    }
}

/// File path part of a `path:line[:extra]` frame.
///
/// The path ends at the first `:` followed by a line number; frames without a
/// line number are returned whole. Drive letters such as `C:\` survive.
pub fn frame_path(frame: &str) -> &str {
    for (idx, _) in frame.match_indices(':') {
        let rest = &frame[idx + 1..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && (digits == rest.len() || rest.as_bytes()[digits] == b':') {
            return &frame[..idx];
        }
    }
    frame
}

/// Rebuild `raw_stack` with the script frame `<file>:<line>` on top.
///
/// Keeps the trailing run of application frames plus the one library frame
/// right above them. With no library frame at all the whole stack is kept
/// after the script frame; an empty stack yields the script frame alone.
pub fn reconcile<M>(raw_stack: &[String], marker: &M, file: &str, line: usize) -> Vec<String>
where
    M: FrameMatcher + ?Sized,
{
    let tail_len = raw_stack
        .iter()
        .rev()
        .take_while(|frame| !marker.is_library_frame(frame))
        .count();
    let first_app_frame = raw_stack.len() - tail_len;

    let mut stack = Vec::with_capacity(tail_len + 2);
    stack.push(format!("{}:{}", file, line));
    if let Some(boundary) = first_app_frame.checked_sub(1) {
        stack.push(raw_stack[boundary].clone());
    }
    stack.extend_from_slice(&raw_stack[first_app_frame..]);
    stack
}
