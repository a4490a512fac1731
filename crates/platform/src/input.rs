//! User buttons.

use core::fmt;

use crate::error::ConversionError;
use crate::pins::{PinId, BUTTON1_PIN, BUTTON2_PIN, BUTTON3_PIN, BUTTON4_PIN};

/// Number of buttons on the board.
///
/// This is a loop/array bound, never a button: no [`Button`] has this index
/// and `Button::try_from(BUTTON_MAX as u8)` fails.
pub const BUTTON_MAX: usize = 4;

/// [`BUTTON_MAX`] as a plain byte, for raw button numbers coming off the wire.
pub const BUTTON_MAX_DEF: u8 = 4;

/// Physical buttons, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Button {
    /// Button 1 (GPIO_03)
    Button1 = 0,
    /// Button 2 (P07)
    Button2 = 1,
    /// Button 3 (P13)
    Button3 = 2,
    /// Button 4 (GPIO_10)
    Button4 = 3,
}

impl Button {
    /// Every button, in index order.
    pub const ALL: [Button; BUTTON_MAX] = [
        Button::Button1,
        Button::Button2,
        Button::Button3,
        Button::Button4,
    ];

    /// Zero-based index, always below [`BUTTON_MAX`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The pin this button is wired to.
    #[must_use]
    pub const fn pin(self) -> PinId {
        match self {
            Button::Button1 => BUTTON1_PIN,
            Button::Button2 => BUTTON2_PIN,
            Button::Button3 => BUTTON3_PIN,
            Button::Button4 => BUTTON4_PIN,
        }
    }

    /// Short display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Button::Button1 => "BUTTON_1",
            Button::Button2 => "BUTTON_2",
            Button::Button3 => "BUTTON_3",
            Button::Button4 => "BUTTON_4",
        }
    }
}

impl TryFrom<u8> for Button {
    type Error = ConversionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Button::Button1),
            1 => Ok(Button::Button2),
            2 => Ok(Button::Button3),
            3 => Ok(Button::Button4),
            other => Err(ConversionError::InvalidButton(other)),
        }
    }
}

impl From<Button> for u8 {
    fn from(button: Button) -> Self {
        button as u8
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
