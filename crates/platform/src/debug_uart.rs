//! Debug trace routing.
//!
//! Trace output can be sent to one of the SoC's UARTs or switched off. The
//! route and the baud rate together form the debug channel configuration
//! handed to [`PlatformDriver::enable_debug_uart`](crate::PlatformDriver::enable_debug_uart).

use core::fmt;

/// Where debug trace output goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebugRoute {
    /// Trace output disabled.
    None,
    /// Wrapped in WICED HCI trace packets on the HCI UART.
    WicedUart,
    /// Raw text on the HCI UART.
    HciUart,
    /// Dedicated debug UART.
    DebugUart,
    /// Peripheral UART.
    #[default]
    Puart,
}

impl DebugRoute {
    /// `true` when trace output shares the HCI UART with the transport.
    #[must_use]
    pub const fn uses_hci_uart(self) -> bool {
        matches!(self, DebugRoute::WicedUart | DebugRoute::HciUart)
    }

    /// Short display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DebugRoute::None => "none",
            DebugRoute::WicedUart => "wiced-uart",
            DebugRoute::HciUart => "hci-uart",
            DebugRoute::DebugUart => "debug-uart",
            DebugRoute::Puart => "puart",
        }
    }
}

impl fmt::Display for DebugRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Debug channel configuration: route plus baud rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebugUart {
    /// Output route.
    pub route: DebugRoute,
    /// Baud rate of the selected UART.
    pub baud_rate: u32,
}
