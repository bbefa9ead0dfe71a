//! Controller state types.

/// Lifecycle state of the preview pipeline.
///
/// Transitions are driven entirely by surface lifecycle callbacks and user
/// actions; there is no timer or background driver:
///
/// ```text
/// Closed -> Opening -> Streaming <-> Stopped -> ... -> Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// No camera handle is open.
    Closed,
    /// A device open is in progress.
    Opening,
    /// Preview frames are streaming to the bound surface.
    Streaming,
    /// A handle is open but streaming is stopped (reconfigure, torch-off,
    /// or a failed bind/start left the device here).
    Stopped,
}

impl std::fmt::Display for PreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PreviewState::Closed => "closed",
            PreviewState::Opening => "opening",
            PreviewState::Streaming => "streaming",
            PreviewState::Stopped => "stopped",
        };
        write!(f, "{name}")
    }
}

/// Whether torch mode is applied to the open handle.
///
/// On only while a handle exists and the torch parameter was successfully
/// applied; releasing the handle always resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorchState {
    /// Torch is off.
    Off,
    /// Torch is continuously on.
    On,
}

impl TorchState {
    /// True when the torch is on.
    pub fn is_on(self) -> bool {
        matches!(self, TorchState::On)
    }
}

impl std::fmt::Display for TorchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TorchState::Off => write!(f, "off"),
            TorchState::On => write!(f, "on"),
        }
    }
}
