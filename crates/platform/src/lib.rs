//! Board support for the CYW943012BTEVK-01 Bluetooth evaluation board
//!
//! This crate describes the board's fixed wiring and owns the small amount
//! of state the board keeps at runtime.
//!
//! # Layout
//!
//! ```text
//! Application (HCI control, audio, ...)
//!         ↓
//! Platform context (this crate: pins, PTU selector, bring-up order)
//!         ↓
//! PlatformDriver (vendor SDK bindings, or MockDriver in tests)
//! ```
//!
//! ## Static board description
//! - [`pins`] - pin assignments per peripheral, checked at compile time
//! - [`Button`] - the four user buttons
//! - [`PtuFifoSource`] - PTU FIFO source selector
//! - [`config`] - board constants and [`PlatformConfig`]
//!
//! ## Runtime
//! - [`Platform`] - context object owning driver, selector and transport state
//! - [`PlatformDriver`] - the seam to the real drivers
//!
//! # Features
//!
//! - `std`: Link `std` (and `tracing/std` when tracing is on), for host builds
//! - `defmt`: defmt log output and `defmt::Format` derives
//! - `tracing`: log output through `tracing` (host builds)
//!
//! # Example
//!
//! ```
//! use evk_platform::mocks::MockDriver;
//! use evk_platform::{OpCode, Platform, PtuFifoSource, HCI_UART_DEFAULT_BAUD};
//!
//! let mut on_rx = |_op: OpCode, _data: &[u8]| {};
//! let mut platform = Platform::new(MockDriver::new());
//!
//! platform.debug_uart_enable(HCI_UART_DEFAULT_BAUD).unwrap();
//! platform.init().unwrap();
//! platform.init_spi().unwrap();
//! platform.set_ptu_fifo(PtuFifoSource::Uart).unwrap();
//! platform.transport_init(&mut on_rx).unwrap();
//!
//! assert_eq!(platform.ptu_fifo(), PtuFifoSource::Uart);
//! assert_ne!(platform.transport_started(), 0);
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
// Pedantic lints suppressed for this board-support crate:
#![allow(clippy::doc_markdown)] // pin and register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// Must come first: the log macros are textually scoped.
mod fmt;

pub mod config;
pub mod debug_uart;
pub mod driver;
pub mod error;
pub mod gpio;
pub mod input;
pub mod mocks;
pub mod peripheral;
pub mod pins;
pub mod platform;
pub mod ptu;

// Re-export the board description
pub use config::{PlatformConfig, BOARD_NAME, DEBUG_UART_DEFAULT_BAUD, HCI_UART_DEFAULT_BAUD};
pub use debug_uart::{DebugRoute, DebugUart};
pub use gpio::{GpioSettings, InterruptMode, Pull};
pub use input::{Button, BUTTON_MAX, BUTTON_MAX_DEF};
pub use peripheral::{AddressMode, BitOrder, I2cConfig, SpiConfig, SpiMode};
pub use pins::{I2sPins, PinBank, PinId, SpiPins};
pub use ptu::PtuFifoSource;

// Re-export the runtime surface
pub use driver::PlatformDriver;
pub use error::{ConversionError, PlatformError, Subsystem};
pub use platform::Platform;

// Re-export the transport contract so applications need only this crate
pub use bluetooth::{OpCode, RxDataHandler, TransportConfig, TransportState};
