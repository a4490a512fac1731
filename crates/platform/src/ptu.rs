//! PTU FIFO source selector.
//!
//! The PTU (protocol transport unit) FIFO can be fed from exactly one of
//! USB, UART, I2C slave or SPI FIFO ("spiffy"). The raw values are bit-flag
//! shaped because that is how the hardware register encodes them, but only
//! one source is ever selected: combinations are not representable.

use core::fmt;

use crate::error::ConversionError;

/// Source feeding the PTU FIFO.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PtuFifoSource {
    /// USB
    Usb = 0x01,
    /// HCI UART
    Uart = 0x02,
    /// I2C slave
    I2cSlave = 0x04,
    /// SPI FIFO
    Spiffy = 0x20,
    /// No source selected / not known.
    #[default]
    Unknown = 0xFF,
}

impl PtuFifoSource {
    /// Every selector value.
    pub const ALL: [PtuFifoSource; 5] = [
        PtuFifoSource::Usb,
        PtuFifoSource::Uart,
        PtuFifoSource::I2cSlave,
        PtuFifoSource::Spiffy,
        PtuFifoSource::Unknown,
    ];

    /// Raw register value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// `true` for every value that names a real data path.
    #[must_use]
    pub const fn is_routable(self) -> bool {
        !matches!(self, PtuFifoSource::Unknown)
    }

    /// Short display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PtuFifoSource::Usb => "USB",
            PtuFifoSource::Uart => "UART",
            PtuFifoSource::I2cSlave => "I2C_SLAVE",
            PtuFifoSource::Spiffy => "SPIFFY",
            PtuFifoSource::Unknown => "UNKNOWN",
        }
    }
}

impl TryFrom<u8> for PtuFifoSource {
    type Error = ConversionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(PtuFifoSource::Usb),
            0x02 => Ok(PtuFifoSource::Uart),
            0x04 => Ok(PtuFifoSource::I2cSlave),
            0x20 => Ok(PtuFifoSource::Spiffy),
            0xFF => Ok(PtuFifoSource::Unknown),
            other => Err(ConversionError::InvalidPtuSource(other)),
        }
    }
}

impl From<PtuFifoSource> for u8 {
    fn from(source: PtuFifoSource) -> Self {
        source.bits()
    }
}

impl fmt::Display for PtuFifoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::PtuFifoSource;
    use crate::error::ConversionError;

    #[test]
    fn test_raw_values_are_bit_exact() {
        assert_eq!(PtuFifoSource::Usb.bits(), 0x01);
        assert_eq!(PtuFifoSource::Uart.bits(), 0x02);
        assert_eq!(PtuFifoSource::I2cSlave.bits(), 0x04);
        assert_eq!(PtuFifoSource::Spiffy.bits(), 0x20);
        assert_eq!(PtuFifoSource::Unknown.bits(), 0xFF);
    }

    #[test]
    fn test_or_combination_is_rejected() {
        let combined = PtuFifoSource::Usb.bits() | PtuFifoSource::Uart.bits();
        assert_eq!(
            PtuFifoSource::try_from(combined),
            Err(ConversionError::InvalidPtuSource(0x03))
        );
    }

    #[test]
    fn test_only_unknown_is_unroutable() {
        for source in PtuFifoSource::ALL {
            assert_eq!(source.is_routable(), source != PtuFifoSource::Unknown);
        }
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(PtuFifoSource::default(), PtuFifoSource::Unknown);
    }
}
