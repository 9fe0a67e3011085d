//! Events that trigger mode transitions

/// Button events, already reduced from raw scanner counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// MODE went down this tick
    ModePress,
    /// UP went down this tick
    UpPress,
    /// UP has been held long enough for one more auto-repeat step
    UpRepeat,
    /// OK went down this tick
    OkPress,
}
