//! HCI transport contract for the CYW943012BTEVK-01 evaluation board.
//!
//! The board talks to its host over the WICED HCI UART. This crate only
//! describes the pieces the platform layer needs to open that link and hand
//! inbound traffic to the application:
//!
//! - [`OpCode`] — 16-bit control op code (group in the high byte)
//! - [`RxDataHandler`] — application callback for inbound HCI data
//! - [`TransportState`] — open/closed flag of the transport
//! - [`TransportConfig`] — UART settings used when opening the link
//!
//! Packet framing and the Bluetooth stack live in the vendor SDK and are not
//! modelled here.
//!
//! This crate is `no_std` by default; it only uses `core`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

pub mod handler;
pub mod opcode;
pub mod state;
pub mod transport;

pub use handler::RxDataHandler;
pub use opcode::OpCode;
pub use state::TransportState;
pub use transport::{TransportConfig, HCI_UART_DEFAULT_BAUD};
