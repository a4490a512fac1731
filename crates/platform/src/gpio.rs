//! GPIO configuration.
//!
//! [`GpioSettings`] describes how a pin is set up (direction, pull resistor,
//! interrupt trigger). Drivers program it through
//! [`GpioSettings::bits`], which uses the SoC's GPIO configuration word.

/// Input buffer enable.
pub const GPIO_INPUT_ENABLE: u32 = 0x0008;
/// Output driver enable.
pub const GPIO_OUTPUT_ENABLE: u32 = 0x4000;
/// Internal pull-up.
pub const GPIO_PULL_UP: u32 = 0x0400;
/// Internal pull-down.
pub const GPIO_PULL_DOWN: u32 = 0x0200;
/// Interrupt on rising edge.
pub const GPIO_EN_INT_RISING_EDGE: u32 = 0x0002;
/// Interrupt on falling edge.
pub const GPIO_EN_INT_FALLING_EDGE: u32 = 0x0004;
/// Interrupt on both edges.
pub const GPIO_EN_INT_BOTH_EDGE: u32 = 0x0006;

/// Pull resistor configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Floating (no pull resistor)
    #[default]
    None,
    /// Pull-up
    Up,
    /// Pull-down
    Down,
}

/// External interrupt configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    /// Trigger on rising edge
    RisingEdge,
    /// Trigger on falling edge
    FallingEdge,
    /// Trigger on both edges
    BothEdges,
}

impl InterruptMode {
    /// Configuration-word bits for this trigger.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            InterruptMode::RisingEdge => GPIO_EN_INT_RISING_EDGE,
            InterruptMode::FallingEdge => GPIO_EN_INT_FALLING_EDGE,
            InterruptMode::BothEdges => GPIO_EN_INT_BOTH_EDGE,
        }
    }

    /// Short display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            InterruptMode::RisingEdge => "rising",
            InterruptMode::FallingEdge => "falling",
            InterruptMode::BothEdges => "both",
        }
    }
}

impl core::fmt::Display for InterruptMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single pin is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioSettings {
    /// Enable the input buffer.
    pub input_enable: bool,
    /// Enable the output driver.
    pub output_enable: bool,
    /// Pull resistor.
    pub pull: Pull,
    /// Interrupt trigger, `None` to leave interrupts disabled.
    pub interrupt: Option<InterruptMode>,
}

impl GpioSettings {
    /// Button input: input enabled, pulled up, interrupting on `trigger`.
    ///
    /// Buttons on this board are active-low, so a press is a falling edge.
    #[must_use]
    pub const fn button(trigger: InterruptMode) -> Self {
        Self {
            input_enable: true,
            output_enable: false,
            pull: Pull::Up,
            interrupt: Some(trigger),
        }
    }

    /// Plain push-pull output with no pull resistor.
    #[must_use]
    pub const fn output() -> Self {
        Self {
            input_enable: false,
            output_enable: true,
            pull: Pull::None,
            interrupt: None,
        }
    }

    /// Encode as the SoC's GPIO configuration word.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.input_enable {
            bits |= GPIO_INPUT_ENABLE;
        }
        if self.output_enable {
            bits |= GPIO_OUTPUT_ENABLE;
        }
        bits |= match self.pull {
            Pull::None => 0,
            Pull::Up => GPIO_PULL_UP,
            Pull::Down => GPIO_PULL_DOWN,
        };
        if let Some(trigger) = self.interrupt {
            bits |= trigger.bits();
        }
        bits
    }
}
