//! Board configuration and constants
//!
//! Central values for the CYW943012BTEVK-01. Bring-up code should reference
//! these constants rather than hardcoding values.

use bluetooth::TransportConfig;

use crate::debug_uart::DebugRoute;
use crate::gpio::InterruptMode;
use crate::peripheral::{I2cConfig, SpiConfig};
use crate::ptu::PtuFifoSource;

pub use bluetooth::HCI_UART_DEFAULT_BAUD;

/// Board name
pub const BOARD_NAME: &str = "CYW943012BTEVK-01";

/// Default baud rate for the debug trace UART.
pub const DEBUG_UART_DEFAULT_BAUD: u32 = 115_200;

/// Settings used by [`Platform`](crate::Platform) during bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlatformConfig {
    /// Where debug trace output is routed.
    pub debug_route: DebugRoute,
    /// HCI UART settings.
    pub transport: TransportConfig,
    /// SPI bus settings.
    pub spi: SpiConfig,
    /// I2C bus settings.
    pub i2c: I2cConfig,
    /// Interrupt trigger programmed on every button pin.
    pub button_trigger: InterruptMode,
    /// PTU FIFO source reported before the first `set_ptu_fifo`.
    pub initial_ptu: PtuFifoSource,
}

impl PlatformConfig {
    /// Stock board configuration.
    pub const DEFAULT: Self = Self {
        debug_route: DebugRoute::Puart,
        transport: TransportConfig::DEFAULT,
        spi: SpiConfig::DEFAULT,
        i2c: I2cConfig::DEFAULT,
        button_trigger: InterruptMode::BothEdges,
        initial_ptu: PtuFifoSource::Unknown,
    };

    /// Route debug output.
    #[must_use]
    pub const fn with_debug_route(self, debug_route: DebugRoute) -> Self {
        Self {
            debug_route,
            ..self
        }
    }

    /// Replace the HCI UART settings.
    #[must_use]
    pub const fn with_transport(self, transport: TransportConfig) -> Self {
        Self { transport, ..self }
    }

    /// Replace the SPI settings.
    #[must_use]
    pub const fn with_spi(self, spi: SpiConfig) -> Self {
        Self { spi, ..self }
    }

    /// Replace the I2C settings.
    #[must_use]
    pub const fn with_i2c(self, i2c: I2cConfig) -> Self {
        Self { i2c, ..self }
    }

    /// Change the button interrupt trigger.
    #[must_use]
    pub const fn with_button_trigger(self, button_trigger: InterruptMode) -> Self {
        Self {
            button_trigger,
            ..self
        }
    }

    /// Change the PTU FIFO source reported before the first selection.
    #[must_use]
    pub const fn with_initial_ptu(self, initial_ptu: PtuFifoSource) -> Self {
        Self {
            initial_ptu,
            ..self
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transport_runs_at_three_megabaud() {
        assert_eq!(PlatformConfig::default().transport.baud_rate, 3_000_000);
        assert_eq!(HCI_UART_DEFAULT_BAUD, 3_000_000);
    }

    #[test]
    fn test_builders() {
        let cfg = PlatformConfig::DEFAULT
            .with_debug_route(DebugRoute::HciUart)
            .with_initial_ptu(PtuFifoSource::Uart)
            .with_button_trigger(InterruptMode::FallingEdge);
        assert_eq!(cfg.debug_route, DebugRoute::HciUart);
        assert_eq!(cfg.initial_ptu, PtuFifoSource::Uart);
        assert_eq!(cfg.button_trigger, InterruptMode::FallingEdge);
        assert_eq!(cfg.spi, SpiConfig::DEFAULT);
    }
}
