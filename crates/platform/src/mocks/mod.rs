//! Mock implementations for testing
//!
//! [`MockDriver`] implements [`PlatformDriver`] without hardware: it records
//! every call it receives and can be told to fail a chosen operation.

use bluetooth::TransportConfig;

use crate::debug_uart::DebugUart;
use crate::driver::PlatformDriver;
use crate::gpio::GpioSettings;
use crate::peripheral::{I2cConfig, SpiConfig};
use crate::pins::{I2sPins, PinId, SpiPins};
use crate::ptu::PtuFifoSource;

/// Maximum number of calls a [`MockDriver`] remembers.
pub const MOCK_CALL_CAPACITY: usize = 64;

/// Driver operations, used to pick which one a [`MockDriver`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `enable_debug_uart`
    DebugUart,
    /// `configure_platform`
    Platform,
    /// `configure_gpio`
    Gpio,
    /// `init_i2s`
    I2s,
    /// `init_spi`
    Spi,
    /// `init_i2c`
    I2c,
    /// `select_ptu_fifo`
    PtuFifo,
    /// `open_transport`
    Transport,
    /// `close_transport`
    TransportClose,
}

/// One recorded driver call with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCall {
    /// `enable_debug_uart`
    EnableDebugUart(DebugUart),
    /// `configure_platform`
    ConfigurePlatform,
    /// `configure_gpio`
    ConfigureGpio(PinId, GpioSettings),
    /// `init_i2s`
    InitI2s(I2sPins),
    /// `init_spi`
    InitSpi(SpiPins, SpiConfig),
    /// `init_i2c`
    InitI2c(I2cConfig),
    /// `select_ptu_fifo`
    SelectPtuFifo(PtuFifoSource),
    /// `open_transport`
    OpenTransport(TransportConfig),
    /// `close_transport`
    CloseTransport,
}

impl DriverCall {
    /// The operation this call belongs to.
    pub fn operation(&self) -> Operation {
        match self {
            DriverCall::EnableDebugUart(_) => Operation::DebugUart,
            DriverCall::ConfigurePlatform => Operation::Platform,
            DriverCall::ConfigureGpio(..) => Operation::Gpio,
            DriverCall::InitI2s(_) => Operation::I2s,
            DriverCall::InitSpi(..) => Operation::Spi,
            DriverCall::InitI2c(_) => Operation::I2c,
            DriverCall::SelectPtuFifo(_) => Operation::PtuFifo,
            DriverCall::OpenTransport(_) => Operation::Transport,
            DriverCall::CloseTransport => Operation::TransportClose,
        }
    }
}

/// Error returned by a [`MockDriver`] told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError {
    /// The operation that failed.
    pub operation: Operation,
}

/// Mock board driver
#[derive(Debug, Default)]
pub struct MockDriver {
    calls: heapless::Vec<DriverCall, MOCK_CALL_CAPACITY>,
    fail_on: Option<Operation>,
}

impl MockDriver {
    /// Create a driver that accepts every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`fail_on`](Self::fail_on).
    #[must_use]
    pub fn failing_on(mut self, operation: Operation) -> Self {
        self.fail_on = Some(operation);
        self
    }

    /// Make every later call of `operation` fail.
    pub fn fail_on(&mut self, operation: Operation) {
        self.fail_on = Some(operation);
    }

    /// Stop injecting failures.
    pub fn clear_failure(&mut self) {
        self.fail_on = None;
    }

    /// Calls received so far, oldest first (failed calls included).
    pub fn calls(&self) -> &[DriverCall] {
        &self.calls
    }

    /// Number of recorded calls of `operation`.
    pub fn count(&self, operation: Operation) -> usize {
        self.calls
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// Forget all recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: DriverCall) -> Result<(), MockError> {
        let operation = call.operation();
        // Calls beyond capacity are not recorded
        let _ = self.calls.push(call);
        if self.fail_on == Some(operation) {
            Err(MockError { operation })
        } else {
            Ok(())
        }
    }
}

impl PlatformDriver for MockDriver {
    type Error = MockError;

    fn enable_debug_uart(&mut self, uart: DebugUart) -> Result<(), Self::Error> {
        self.record(DriverCall::EnableDebugUart(uart))
    }

    fn configure_platform(&mut self) -> Result<(), Self::Error> {
        self.record(DriverCall::ConfigurePlatform)
    }

    fn configure_gpio(&mut self, pin: PinId, settings: GpioSettings) -> Result<(), Self::Error> {
        self.record(DriverCall::ConfigureGpio(pin, settings))
    }

    fn init_i2s(&mut self, pins: &I2sPins) -> Result<(), Self::Error> {
        self.record(DriverCall::InitI2s(*pins))
    }

    fn init_spi(&mut self, pins: &SpiPins, config: &SpiConfig) -> Result<(), Self::Error> {
        self.record(DriverCall::InitSpi(*pins, *config))
    }

    fn init_i2c(&mut self, config: &I2cConfig) -> Result<(), Self::Error> {
        self.record(DriverCall::InitI2c(*config))
    }

    fn select_ptu_fifo(&mut self, source: PtuFifoSource) -> Result<(), Self::Error> {
        self.record(DriverCall::SelectPtuFifo(source))
    }

    fn open_transport(&mut self, config: &TransportConfig) -> Result<(), Self::Error> {
        self.record(DriverCall::OpenTransport(*config))
    }

    fn close_transport(&mut self) -> Result<(), Self::Error> {
        self.record(DriverCall::CloseTransport)
    }
}
