//! Bring-up lifecycle tests against the mock driver.
//!
//! Cover the ordering rules (platform before buses and transport), the
//! transport started flag, and the PTU FIFO selector round trip.

// Test files legitimately use unwrap() for readable assertions.
#![allow(clippy::unwrap_used)]

use core::cell::RefCell;

use evk_platform::mocks::{DriverCall, MockDriver, MockError, Operation};
use evk_platform::pins::{I2S_PINS, RESET_PIN, SPI_PINS};
use evk_platform::{
    DebugRoute, DebugUart, GpioSettings, OpCode, Platform, PlatformConfig, PlatformError,
    PtuFifoSource, Subsystem, TransportConfig, HCI_UART_DEFAULT_BAUD,
};

fn initialised() -> Platform<'static, MockDriver> {
    let mut platform = Platform::new(MockDriver::new());
    platform.init().unwrap();
    platform.driver_mut().clear_calls();
    platform
}

// ── PTU FIFO selector ────────────────────────────────────────────────────────

#[test]
fn ptu_get_returns_what_was_set() {
    let mut platform = Platform::new(MockDriver::new());
    for source in PtuFifoSource::ALL {
        platform.set_ptu_fifo(source).unwrap();
        assert_eq!(platform.ptu_fifo(), source);
    }
}

#[test]
fn ptu_uart_scenario_reports_0x02() {
    let mut platform = initialised();
    platform.set_ptu_fifo(PtuFifoSource::Uart).unwrap();
    assert_eq!(platform.ptu_fifo(), PtuFifoSource::Uart);
    assert_eq!(platform.ptu_fifo().bits(), 0x02);
    assert_eq!(
        platform.driver().calls(),
        &[DriverCall::SelectPtuFifo(PtuFifoSource::Uart)]
    );
}

#[test]
fn ptu_unknown_is_stored_without_touching_hardware() {
    let mut platform = Platform::new(MockDriver::new());
    platform.set_ptu_fifo(PtuFifoSource::Spiffy).unwrap();
    platform.set_ptu_fifo(PtuFifoSource::Unknown).unwrap();
    assert_eq!(platform.ptu_fifo(), PtuFifoSource::Unknown);
    assert_eq!(platform.driver().count(Operation::PtuFifo), 1);
}

#[test]
fn ptu_driver_failure_keeps_previous_source() {
    let mut platform = Platform::new(MockDriver::new());
    platform.set_ptu_fifo(PtuFifoSource::Usb).unwrap();

    platform.driver_mut().fail_on(Operation::PtuFifo);
    let err = platform.set_ptu_fifo(PtuFifoSource::I2cSlave).unwrap_err();
    assert_eq!(
        err,
        PlatformError::Driver(MockError {
            operation: Operation::PtuFifo
        })
    );
    assert_eq!(platform.ptu_fifo(), PtuFifoSource::Usb);
}

#[test]
fn ptu_initial_value_comes_from_config() {
    let config = PlatformConfig::DEFAULT.with_initial_ptu(PtuFifoSource::Usb);
    let platform = Platform::with_config(MockDriver::new(), config);
    assert_eq!(platform.ptu_fifo(), PtuFifoSource::Usb);
}

// ── Transport ────────────────────────────────────────────────────────────────

#[test]
fn transport_flag_goes_nonzero_on_success() {
    let mut handler = |_op: OpCode, _data: &[u8]| {};
    let mut platform = Platform::new(MockDriver::new());
    platform.init().unwrap();

    assert_eq!(platform.transport_started(), 0);
    assert!(platform.transport_init(&mut handler).is_ok());
    assert_ne!(platform.transport_started(), 0);
    assert!(platform.is_initialized(Subsystem::Transport));
    assert!(platform
        .driver()
        .calls()
        .contains(&DriverCall::OpenTransport(TransportConfig::DEFAULT)));
}

#[test]
fn transport_flag_unchanged_on_driver_failure() {
    let mut handler = |_op: OpCode, _data: &[u8]| {};
    let mut platform = Platform::new(MockDriver::new().failing_on(Operation::Transport));
    platform.init().unwrap();

    assert!(matches!(
        platform.transport_init(&mut handler),
        Err(PlatformError::Driver(_))
    ));
    assert_eq!(platform.transport_started(), 0);
    assert_eq!(
        platform.deliver_rx(OpCode::new(1), &[0]),
        Err(PlatformError::TransportClosed)
    );
}

#[test]
fn transport_requires_platform_init() {
    let mut handler = |_op: OpCode, _data: &[u8]| {};
    let mut platform = Platform::new(MockDriver::new());

    assert_eq!(
        platform.transport_init(&mut handler),
        Err(PlatformError::NotInitialized(Subsystem::Transport))
    );
    assert_eq!(platform.transport_started(), 0);
    assert_eq!(platform.driver().count(Operation::Transport), 0);
}

#[test]
fn transport_second_open_is_rejected_and_first_handler_kept() {
    let first_hits = RefCell::new(0_u32);
    let second_hits = RefCell::new(0_u32);
    let mut first = |_op: OpCode, _data: &[u8]| *first_hits.borrow_mut() += 1;
    let mut second = |_op: OpCode, _data: &[u8]| *second_hits.borrow_mut() += 1;

    let mut platform = Platform::new(MockDriver::new());
    platform.init().unwrap();
    platform.transport_init(&mut first).unwrap();
    assert_eq!(
        platform.transport_init(&mut second),
        Err(PlatformError::TransportAlreadyOpen)
    );
    assert_ne!(platform.transport_started(), 0);
    assert_eq!(platform.driver().count(Operation::Transport), 1);

    platform.deliver_rx(OpCode::new(0x0001), &[]).unwrap();
    assert_eq!(*first_hits.borrow(), 1);
    assert_eq!(*second_hits.borrow(), 0);
}

#[test]
fn transport_delivers_op_code_and_payload() {
    let received: RefCell<Vec<(u16, Vec<u8>)>> = RefCell::new(Vec::new());
    let mut handler =
        |op: OpCode, data: &[u8]| received.borrow_mut().push((op.raw(), data.to_vec()));

    let mut platform = Platform::new(MockDriver::new());
    platform.init().unwrap();
    platform.transport_init(&mut handler).unwrap();

    platform
        .deliver_rx(OpCode::from_parts(0x01, 0x05), &[0xAA, 0xBB])
        .unwrap();
    platform.deliver_rx(OpCode::new(0xFF02), &[]).unwrap();

    assert_eq!(
        *received.borrow(),
        vec![(0x0105, vec![0xAA, 0xBB]), (0xFF02, vec![])]
    );
}

#[test]
fn transport_uses_configured_uart_settings() {
    let mut handler = |_op: OpCode, _data: &[u8]| {};
    let transport = TransportConfig::DEFAULT
        .with_baud_rate(921_600)
        .with_flow_control(false);
    let config = PlatformConfig::DEFAULT.with_transport(transport);
    let mut platform = Platform::with_config(MockDriver::new(), config);
    platform.init().unwrap();
    platform.transport_init(&mut handler).unwrap();

    assert_eq!(
        platform.driver().calls().last(),
        Some(&DriverCall::OpenTransport(transport))
    );
}

#[test]
fn transport_reopens_after_shutdown_with_new_handler() {
    let first_hits = RefCell::new(0_u32);
    let second_hits = RefCell::new(0_u32);
    let mut first = |_op: OpCode, _data: &[u8]| *first_hits.borrow_mut() += 1;
    let mut second = |_op: OpCode, _data: &[u8]| *second_hits.borrow_mut() += 1;

    let mut platform = Platform::new(MockDriver::new());
    platform.init().unwrap();
    platform.driver_mut().clear_calls();
    platform.transport_init(&mut first).unwrap();
    assert!(platform.transport_shutdown().unwrap().is_some());
    assert_eq!(platform.transport_started(), 0);
    platform.transport_init(&mut second).unwrap();
    assert_ne!(platform.transport_started(), 0);

    let transport = TransportConfig::DEFAULT;
    assert_eq!(
        platform.driver().calls(),
        &[
            DriverCall::OpenTransport(transport),
            DriverCall::CloseTransport,
            DriverCall::OpenTransport(transport),
        ]
    );

    platform.deliver_rx(OpCode::new(0x0002), &[7]).unwrap();
    assert_eq!(*first_hits.borrow(), 0);
    assert_eq!(*second_hits.borrow(), 1);
}

#[test]
fn transport_shutdown_while_closed_skips_the_driver() {
    let mut platform = initialised();
    assert!(platform.transport_shutdown().unwrap().is_none());
    assert_eq!(platform.driver().count(Operation::TransportClose), 0);
}

// ── Platform and bus init ────────────────────────────────────────────────────

#[test]
fn platform_init_retry_runs_interface_setup_once() {
    let mut platform = Platform::new(MockDriver::new().failing_on(Operation::Gpio));
    assert!(matches!(platform.init(), Err(PlatformError::Driver(_))));
    assert_eq!(platform.driver().count(Operation::Platform), 1);

    platform.driver_mut().clear_failure();
    platform.init().unwrap();
    assert_eq!(platform.driver().count(Operation::Platform), 1);
    assert!(platform.is_initialized(Subsystem::Platform));
}

#[test]
fn platform_init_drives_reset_line_as_output() {
    let mut platform = Platform::new(MockDriver::new());
    platform.init().unwrap();
    assert!(platform
        .driver()
        .calls()
        .contains(&DriverCall::ConfigureGpio(RESET_PIN, GpioSettings::output())));
}

#[test]
fn buses_require_platform_init() {
    let mut platform = Platform::new(MockDriver::new());
    assert_eq!(
        platform.init_i2s(),
        Err(PlatformError::NotInitialized(Subsystem::I2s))
    );
    assert_eq!(
        platform.init_spi(),
        Err(PlatformError::NotInitialized(Subsystem::Spi))
    );
    assert_eq!(
        platform.init_i2c(),
        Err(PlatformError::NotInitialized(Subsystem::I2c))
    );
    assert!(platform.driver().calls().is_empty());
}

#[test]
fn buses_init_in_any_order_with_board_pins() {
    let mut platform = initialised();
    platform.init_i2c().unwrap();
    platform.init_spi().unwrap();
    platform.init_i2s().unwrap();

    let config = *platform.config();
    assert_eq!(
        platform.driver().calls(),
        &[
            DriverCall::InitI2c(config.i2c),
            DriverCall::InitSpi(SPI_PINS, config.spi),
            DriverCall::InitI2s(I2S_PINS),
        ]
    );
    assert!(platform.is_initialized(Subsystem::I2s));
    assert!(platform.is_initialized(Subsystem::Spi));
    assert!(platform.is_initialized(Subsystem::I2c));
}

#[test]
fn bus_init_twice_is_rejected() {
    let mut platform = initialised();
    platform.init_spi().unwrap();
    assert_eq!(
        platform.init_spi(),
        Err(PlatformError::AlreadyInitialized(Subsystem::Spi))
    );
    assert_eq!(platform.driver().count(Operation::Spi), 1);
}

#[test]
fn bus_driver_failure_leaves_bus_down() {
    let mut platform = initialised();
    platform.driver_mut().fail_on(Operation::I2s);
    assert!(platform.init_i2s().is_err());
    assert!(!platform.is_initialized(Subsystem::I2s));

    platform.driver_mut().clear_failure();
    platform.init_i2s().unwrap();
    assert!(platform.is_initialized(Subsystem::I2s));
}

// ── Debug channel ────────────────────────────────────────────────────────────

#[test]
fn debug_uart_uses_configured_route() {
    let config = PlatformConfig::DEFAULT.with_debug_route(DebugRoute::HciUart);
    let mut platform = Platform::with_config(MockDriver::new(), config);
    platform.debug_uart_enable(HCI_UART_DEFAULT_BAUD).unwrap();

    let expected = DebugUart {
        route: DebugRoute::HciUart,
        baud_rate: 3_000_000,
    };
    assert_eq!(platform.debug_uart(), Some(expected));
    assert_eq!(
        platform.driver().calls(),
        &[DriverCall::EnableDebugUart(expected)]
    );
}

#[test]
fn debug_uart_rejects_zero_baud() {
    let mut platform = Platform::new(MockDriver::new());
    assert_eq!(
        platform.debug_uart_enable(0),
        Err(PlatformError::InvalidBaudRate(0))
    );
    assert!(platform.debug_uart().is_none());
    assert!(platform.driver().calls().is_empty());
}

#[test]
fn debug_uart_can_be_reconfigured() {
    let mut platform = Platform::new(MockDriver::new());
    platform.debug_uart_enable(115_200).unwrap();
    platform.debug_uart_enable(921_600).unwrap();
    assert_eq!(platform.debug_uart().map(|u| u.baud_rate), Some(921_600));
}

#[test]
fn into_driver_returns_recorded_calls() {
    let platform = initialised();
    let driver = platform.into_driver();
    assert!(driver.calls().is_empty());
}
