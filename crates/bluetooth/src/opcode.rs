//! WICED HCI control op codes.
//!
//! Every inbound HCI control packet carries a 16-bit op code. The high byte
//! selects the control group (device, LE, GATT, ...) and the low byte the
//! command inside that group:
//!
//! ```text
//!  15            8 7             0
//! +---------------+---------------+
//! |     group     |    command    |
//! +---------------+---------------+
//! ```

use core::fmt;

/// A 16-bit HCI control op code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct OpCode(u16);

impl OpCode {
    /// Wrap a raw op code as received from the transport.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Build an op code from its control group and command bytes.
    #[must_use]
    pub const fn from_parts(group: u8, command: u8) -> Self {
        Self(u16::from_be_bytes([group, command]))
    }

    /// Control group (high byte).
    #[must_use]
    pub const fn group(self) -> u8 {
        let [group, _] = self.0.to_be_bytes();
        group
    }

    /// Command inside the group (low byte).
    #[must_use]
    pub const fn command(self) -> u8 {
        let [_, command] = self.0.to_be_bytes();
        command
    }

    /// Raw 16-bit value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for OpCode {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<OpCode> for u16 {
    fn from(op: OpCode) -> Self {
        op.0
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::OpCode;

    #[test]
    fn test_opcode_split_group_and_command() {
        let op = OpCode::new(0x0102);
        assert_eq!(op.group(), 0x01);
        assert_eq!(op.command(), 0x02);
    }

    #[test]
    fn test_opcode_from_parts_matches_raw() {
        // Device group (0x00), reset command (0x01).
        assert_eq!(OpCode::from_parts(0x00, 0x01).raw(), 0x0001);
        assert_eq!(OpCode::from_parts(0xFF, 0x02).raw(), 0xFF02);
    }

    #[test]
    fn test_opcode_u16_conversions() {
        let op = OpCode::from(0xABCD_u16);
        assert_eq!(u16::from(op), 0xABCD);
    }

    #[test]
    fn test_opcode_display_is_hex() {
        assert_eq!(OpCode::new(0x0A1F).to_string(), "0x0A1F");
    }
}
