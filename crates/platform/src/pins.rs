//! Pin assignments for the CYW943012BTEVK-01.
//!
//! Single source of truth for the board's pinout. Drivers receive these
//! values through [`PlatformDriver`](crate::PlatformDriver) rather than
//! hard-coding pin numbers.
//!
//! The SoC exposes two pin banks:
//!
//! | Bank | Vendor name | Notes |
//! |------|-------------|-------|
//! | [`PinBank::P`]    | `WICED_Pxx`      | LHL GPIO, P00–P39 |
//! | [`PinBank::Gpio`] | `WICED_GPIO_xx`  | ARM GPIO (A_GPIO / PCM pads) |
//!
//! | Signal   | Pin      | Notes                         |
//! |----------|----------|-------------------------------|
//! | SPI CS   | P00      |                               |
//! | SPI CLK  | P11      |                               |
//! | SPI MOSI | P01      |                               |
//! | SPI MISO | P09      |                               |
//! | I2S DI   | P04      |                               |
//! | I2S DO   | P06      |                               |
//! | I2S WS   | GPIO_09  | BT_PCM_SYNC, A_GPIO\[1\]      |
//! | I2S CLK  | GPIO_08  | BT_PCM_CLK, A_GPIO\[0\]       |
//! | Reset    | P34      |                               |
//! | Button 1 | GPIO_03  | Active-low, internal pull-up  |
//! | Button 2 | P07      | Active-low, internal pull-up  |
//! | Button 3 | P13      | Active-low, internal pull-up  |
//! | Button 4 | GPIO_10  | Active-low, internal pull-up  |
//!
//! The audio image only compiles against the SPI and I2S assignments; the
//! buses are not wired to anything on the stock board.

use core::fmt;

/// Pin bank of the SoC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinBank {
    /// LHL GPIO (`WICED_Pxx`).
    P,
    /// ARM GPIO (`WICED_GPIO_xx`).
    Gpio,
}

/// A physical pin: bank plus index inside the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    bank: PinBank,
    index: u8,
}

impl PinId {
    /// LHL pin `Pxx`.
    #[must_use]
    pub const fn p(index: u8) -> Self {
        Self {
            bank: PinBank::P,
            index,
        }
    }

    /// ARM GPIO pin `GPIO_xx`.
    #[must_use]
    pub const fn gpio(index: u8) -> Self {
        Self {
            bank: PinBank::Gpio,
            index,
        }
    }

    /// Bank this pin belongs to.
    #[must_use]
    pub const fn bank(self) -> PinBank {
        self.bank
    }

    /// Index inside the bank (the `xx` of `Pxx` / `GPIO_xx`).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// `const` equality, usable in compile-time assertions.
    #[must_use]
    pub const fn same_as(self, other: PinId) -> bool {
        self.bank as u8 == other.bank as u8 && self.index == other.index
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bank {
            PinBank::P => write!(f, "P{:02}", self.index),
            PinBank::Gpio => write!(f, "GPIO_{:02}", self.index),
        }
    }
}

// ── Individual signals ───────────────────────────────────────────────────────

/// SPI chip select.
pub const SPI_CS: PinId = PinId::p(0);
/// SPI clock.
pub const SPI_CLK: PinId = PinId::p(11);
/// SPI controller-out / peripheral-in.
pub const SPI_MOSI: PinId = PinId::p(1);
/// SPI controller-in / peripheral-out.
pub const SPI_MISO: PinId = PinId::p(9);

/// I2S data in.
pub const I2S_DI: PinId = PinId::p(4);
/// I2S data out.
pub const I2S_DO: PinId = PinId::p(6);
/// I2S word select (BT_PCM_SYNC, A_GPIO\[1\]).
pub const I2S_WS: PinId = PinId::gpio(9);
/// I2S bit clock (BT_PCM_CLK, A_GPIO\[0\]).
pub const I2S_CLK: PinId = PinId::gpio(8);

/// Reset line.
pub const RESET_PIN: PinId = PinId::p(34);

/// Button 1.
pub const BUTTON1_PIN: PinId = PinId::gpio(3);
/// Button 2.
pub const BUTTON2_PIN: PinId = PinId::p(7);
/// Button 3.
pub const BUTTON3_PIN: PinId = PinId::p(13);
/// Button 4.
pub const BUTTON4_PIN: PinId = PinId::gpio(10);

// ── Peripheral groups ────────────────────────────────────────────────────────

/// SPI bus signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiPins {
    /// Chip select.
    pub cs: PinId,
    /// Clock.
    pub clk: PinId,
    /// Controller-out / peripheral-in.
    pub mosi: PinId,
    /// Controller-in / peripheral-out.
    pub miso: PinId,
}

impl SpiPins {
    /// All signals, in `cs, clk, mosi, miso` order.
    #[must_use]
    pub const fn as_array(&self) -> [PinId; 4] {
        [self.cs, self.clk, self.mosi, self.miso]
    }
}

/// I2S bus signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sPins {
    /// Data in.
    pub data_in: PinId,
    /// Data out.
    pub data_out: PinId,
    /// Word select.
    pub word_select: PinId,
    /// Bit clock.
    pub clock: PinId,
}

impl I2sPins {
    /// All signals, in `data_in, data_out, word_select, clock` order.
    #[must_use]
    pub const fn as_array(&self) -> [PinId; 4] {
        [self.data_in, self.data_out, self.word_select, self.clock]
    }
}

/// The board's SPI wiring.
pub const SPI_PINS: SpiPins = SpiPins {
    cs: SPI_CS,
    clk: SPI_CLK,
    mosi: SPI_MOSI,
    miso: SPI_MISO,
};

/// The board's I2S wiring.
pub const I2S_PINS: I2sPins = I2sPins {
    data_in: I2S_DI,
    data_out: I2S_DO,
    word_select: I2S_WS,
    clock: I2S_CLK,
};

/// Button pins, indexed by [`Button::index`](crate::Button::index).
pub const BUTTON_PINS: [PinId; crate::input::BUTTON_MAX] =
    [BUTTON1_PIN, BUTTON2_PIN, BUTTON3_PIN, BUTTON4_PIN];

/// Returns `true` if no two entries of `pins` name the same pin.
#[must_use]
#[allow(clippy::indexing_slicing)] // i < j < pins.len() bounds every access
#[allow(clippy::arithmetic_side_effects)] // loop counters stay below pins.len()
pub const fn all_distinct(pins: &[PinId]) -> bool {
    let mut i = 0;
    while i < pins.len() {
        let mut j = i + 1;
        while j < pins.len() {
            if pins[i].same_as(pins[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(all_distinct(&SPI_PINS.as_array()), "SPI signals share a pin");
const _: () = assert!(all_distinct(&I2S_PINS.as_array()), "I2S signals share a pin");
const _: () = assert!(all_distinct(&BUTTON_PINS), "two buttons share a pin");
