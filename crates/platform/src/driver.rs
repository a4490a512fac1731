//! The seam between [`Platform`](crate::Platform) and the vendor drivers.

use bluetooth::TransportConfig;

use crate::debug_uart::DebugUart;
use crate::gpio::GpioSettings;
use crate::peripheral::{I2cConfig, SpiConfig};
use crate::pins::{I2sPins, PinId, SpiPins};
use crate::ptu::PtuFifoSource;

/// Hardware operations the platform context needs from the board's drivers.
///
/// Every call is a bounded, synchronous register setup. Implementations are
/// the real SDK bindings on target and [`MockDriver`](crate::mocks::MockDriver)
/// in tests. [`Platform`](crate::Platform) guarantees the call order
/// (platform setup before any bus or transport), so implementations need not
/// re-check it.
pub trait PlatformDriver {
    /// Error type
    type Error: core::fmt::Debug;

    /// Route debug trace output and set its baud rate.
    fn enable_debug_uart(&mut self, uart: DebugUart) -> Result<(), Self::Error>;

    /// One-time platform peripheral interface setup.
    fn configure_platform(&mut self) -> Result<(), Self::Error>;

    /// Configure a single pin.
    fn configure_gpio(&mut self, pin: PinId, settings: GpioSettings) -> Result<(), Self::Error>;

    /// Bring up the I2S bus on `pins`.
    fn init_i2s(&mut self, pins: &I2sPins) -> Result<(), Self::Error>;

    /// Bring up the SPI bus on `pins`.
    fn init_spi(&mut self, pins: &SpiPins, config: &SpiConfig) -> Result<(), Self::Error>;

    /// Bring up the I2C bus.
    fn init_i2c(&mut self, config: &I2cConfig) -> Result<(), Self::Error>;

    /// Route the PTU FIFO to `source`. Never called with
    /// [`PtuFifoSource::Unknown`].
    fn select_ptu_fifo(&mut self, source: PtuFifoSource) -> Result<(), Self::Error>;

    /// Open the HCI UART.
    fn open_transport(&mut self, config: &TransportConfig) -> Result<(), Self::Error>;

    /// Close the HCI UART. Only called while it is open.
    fn close_transport(&mut self) -> Result<(), Self::Error>;
}
