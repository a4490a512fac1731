//! HCI UART settings used when the transport is opened.

/// Default HCI UART baud rate.
///
/// 3 Mbaud is the highest rate the macOS serial driver handles reliably, so
/// it is the default for every host.
pub const HCI_UART_DEFAULT_BAUD: u32 = 3_000_000;

/// UART settings for the HCI transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportConfig {
    /// Baud rate of the HCI UART.
    pub baud_rate: u32,
    /// Hardware (RTS/CTS) flow control.
    pub flow_control: bool,
}

impl TransportConfig {
    /// Default configuration: [`HCI_UART_DEFAULT_BAUD`] with flow control.
    pub const DEFAULT: Self = Self {
        baud_rate: HCI_UART_DEFAULT_BAUD,
        flow_control: true,
    };

    /// Same configuration with a different baud rate.
    #[must_use]
    pub const fn with_baud_rate(self, baud_rate: u32) -> Self {
        Self { baud_rate, ..self }
    }

    /// Same configuration with flow control switched on or off.
    #[must_use]
    pub const fn with_flow_control(self, flow_control: bool) -> Self {
        Self {
            flow_control,
            ..self
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_baud_is_three_megabaud() {
        assert_eq!(HCI_UART_DEFAULT_BAUD, 3_000_000);
        assert_eq!(TransportConfig::default().baud_rate, HCI_UART_DEFAULT_BAUD);
        assert!(TransportConfig::default().flow_control);
    }

    #[test]
    fn test_builders_change_one_field() {
        let cfg = TransportConfig::DEFAULT.with_baud_rate(115_200);
        assert_eq!(cfg.baud_rate, 115_200);
        assert!(cfg.flow_control);

        let cfg = cfg.with_flow_control(false);
        assert_eq!(cfg.baud_rate, 115_200);
        assert!(!cfg.flow_control);
    }
}
