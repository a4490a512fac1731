//! Application callback for inbound HCI data.

use crate::OpCode;

/// Receives inbound HCI control data from the transport.
///
/// The transport calls [`on_rx_data`](RxDataHandler::on_rx_data) once per
/// received packet, synchronously, from whatever context picked the data up
/// (a UART interrupt on hardware, a reader task on the host). The handler
/// owns its own thread-safety; nothing is locked around the call.
///
/// Delivery is fire-and-forget: there is no way to report a failure back to
/// the transport.
///
/// Any `FnMut(OpCode, &[u8])` closure is a handler:
///
/// ```
/// use bluetooth::{OpCode, RxDataHandler};
///
/// let mut seen = 0_usize;
/// let mut handler = |_op: OpCode, data: &[u8]| seen += data.len();
/// handler.on_rx_data(OpCode::new(0x0001), &[1, 2, 3]);
/// assert_eq!(seen, 3);
/// ```
pub trait RxDataHandler {
    /// Handle one inbound packet. `data.len()` is the packet's data length.
    fn on_rx_data(&mut self, op_code: OpCode, data: &[u8]);
}

impl<F> RxDataHandler for F
where
    F: FnMut(OpCode, &[u8]),
{
    fn on_rx_data(&mut self, op_code: OpCode, data: &[u8]) {
        self(op_code, data);
    }
}
