//! Handler delivery tests through the public API.
//!
//! These mirror how the platform context forwards inbound packets: the
//! handler is reached through `&mut dyn RxDataHandler` and must see every
//! op code and byte exactly as delivered.

use bluetooth::{OpCode, RxDataHandler, TransportState};

#[test]
fn handler_sees_packets_in_delivery_order() {
    let mut log: heapless::Vec<(u16, usize), 8> = heapless::Vec::new();
    let mut record = |op: OpCode, data: &[u8]| {
        let _ = log.push((op.raw(), data.len()));
    };

    {
        let handler: &mut dyn RxDataHandler = &mut record;
        handler.on_rx_data(OpCode::from_parts(0x00, 0x01), &[]);
        handler.on_rx_data(OpCode::from_parts(0x01, 0x05), &[1, 2, 3]);
        handler.on_rx_data(OpCode::from_parts(0xFF, 0x02), &[0; 32]);
    }

    assert_eq!(log.as_slice(), &[(0x0001, 0), (0x0105, 3), (0xFF02, 32)]);
}

#[test]
fn handler_receives_payload_bytes_unchanged() {
    let mut copy: heapless::Vec<u8, 16> = heapless::Vec::new();
    let mut record = |_op: OpCode, data: &[u8]| {
        copy.clear();
        let _ = copy.extend_from_slice(data);
    };

    record.on_rx_data(OpCode::new(0x0203), &[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(copy.as_slice(), &[0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn transport_state_round_trip_through_flag() {
    let mut state = TransportState::new();
    assert_eq!(state.started_flag(), 0);
    state.on_opened();
    assert_ne!(state.started_flag(), 0);
    state.on_closed();
    assert_eq!(state.started_flag(), 0);
}
