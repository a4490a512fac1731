//! Error types for platform bring-up.

use core::fmt;

use thiserror::Error;

/// Parts of the platform with their own init step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Subsystem {
    /// Platform peripheral interface settings.
    Platform,
    /// I2S bus.
    I2s,
    /// SPI bus.
    Spi,
    /// I2C bus.
    I2c,
    /// HCI transport.
    Transport,
}

impl Subsystem {
    /// Short display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Subsystem::Platform => "platform",
            Subsystem::I2s => "I2S",
            Subsystem::Spi => "SPI",
            Subsystem::I2c => "I2C",
            Subsystem::Transport => "HCI transport",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`Platform`](crate::Platform) operations.
///
/// `E` is the error type of the board's [`PlatformDriver`](crate::PlatformDriver).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError<E> {
    /// The underlying driver reported a failure.
    #[error("platform driver failed")]
    Driver(E),

    /// `init()` has not run yet.
    #[error("{0} needs the platform to be initialised first")]
    NotInitialized(Subsystem),

    /// The subsystem was already brought up.
    #[error("{0} is already initialised")]
    AlreadyInitialized(Subsystem),

    /// A baud rate of zero was requested.
    #[error("invalid baud rate {0}")]
    InvalidBaudRate(u32),

    /// The HCI transport is already open.
    #[error("HCI transport is already open")]
    TransportAlreadyOpen,

    /// Inbound data arrived while the transport is closed.
    #[error("HCI transport is closed")]
    TransportClosed,
}

/// Errors converting raw wire values into board types.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// Not one of the five PTU FIFO selector values.
    #[error("invalid PTU FIFO source {0:#04x}")]
    InvalidPtuSource(u8),

    /// Not a button index (`0..BUTTON_MAX`).
    #[error("invalid button index {0}")]
    InvalidButton(u8),
}
