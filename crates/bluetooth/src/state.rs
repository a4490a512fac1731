//! HCI transport open/closed state.

/// Tracks whether the HCI transport is open.
///
/// The state is kept as a single byte so it can be handed out unchanged to
/// code that expects the vendor convention: `0` means closed, any other value
/// means open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportState {
    started: u8,
}

impl TransportState {
    /// Flag value while the transport is closed.
    pub const CLOSED: u8 = 0;

    /// Flag value written when the transport opens.
    pub const OPEN: u8 = 1;

    /// Create a new, closed state.
    #[must_use]
    pub const fn new() -> Self {
        TransportState {
            started: Self::CLOSED,
        }
    }

    /// Record that the transport opened successfully.
    pub fn on_opened(&mut self) {
        self.started = Self::OPEN;
    }

    /// Record that the transport was closed.
    pub fn on_closed(&mut self) {
        self.started = Self::CLOSED;
    }

    /// Returns `true` if the transport is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.started != Self::CLOSED
    }

    /// Raw started flag: `0` closed, nonzero open.
    #[must_use]
    pub const fn started_flag(&self) -> u8 {
        self.started
    }
}

impl Default for TransportState {
    fn default() -> Self {
        Self::new()
    }
}
