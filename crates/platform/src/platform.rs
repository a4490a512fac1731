//! The platform context object.
//!
//! [`Platform`] owns everything the board keeps between calls: the driver,
//! which subsystems are up, the PTU FIFO selector, the transport state and
//! the registered rx-data handler. There is no global state; callers that
//! share the context with interrupt handlers wrap it in their own critical
//! section.
//!
//! Bring-up order:
//!
//! ```text
//! debug_uart_enable()   (any time)
//!        ↓
//! init()                (exactly once)
//!        ↓
//! init_i2s() / init_spi() / init_i2c()   (any order, each once)
//!        ↓
//! transport_init(handler)
//! ```

use bluetooth::{OpCode, RxDataHandler, TransportState};

use crate::config::{PlatformConfig, BOARD_NAME};
use crate::debug_uart::DebugUart;
use crate::driver::PlatformDriver;
use crate::error::{PlatformError, Subsystem};
use crate::gpio::GpioSettings;
use crate::input::Button;
use crate::pins::{I2S_PINS, RESET_PIN, SPI_PINS};
use crate::ptu::PtuFifoSource;

/// Which subsystems have completed their init step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Initialized {
    /// `configure_platform` succeeded; never repeated, even on retry.
    platform_configured: bool,
    platform: bool,
    i2s: bool,
    spi: bool,
    i2c: bool,
}

/// Board context: driver plus all platform state.
///
/// `'h` is the lifetime of the rx-data handler registered by
/// [`transport_init`](Platform::transport_init).
pub struct Platform<'h, D: PlatformDriver> {
    driver: D,
    config: PlatformConfig,
    initialized: Initialized,
    debug_uart: Option<DebugUart>,
    ptu: PtuFifoSource,
    transport: TransportState,
    rx_handler: Option<&'h mut dyn RxDataHandler>,
}

impl<'h, D: PlatformDriver> Platform<'h, D> {
    /// Create a context with the stock [`PlatformConfig`].
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, PlatformConfig::DEFAULT)
    }

    /// Create a context with a custom configuration.
    pub fn with_config(driver: D, config: PlatformConfig) -> Self {
        Self {
            driver,
            config,
            initialized: Initialized::default(),
            debug_uart: None,
            ptu: config.initial_ptu,
            transport: TransportState::new(),
            rx_handler: None,
        }
    }

    // ── Debug channel ────────────────────────────────────────────────────────

    /// Enable debug trace output at `baud_rate` on the configured route.
    ///
    /// May be called before [`init`](Self::init) and again later to change the
    /// rate.
    pub fn debug_uart_enable(&mut self, baud_rate: u32) -> Result<(), PlatformError<D::Error>> {
        if baud_rate == 0 {
            return Err(PlatformError::InvalidBaudRate(baud_rate));
        }
        let uart = DebugUart {
            route: self.config.debug_route,
            baud_rate,
        };
        self.driver
            .enable_debug_uart(uart)
            .map_err(PlatformError::Driver)?;
        self.debug_uart = Some(uart);
        info!("debug output on {} at {} baud", uart.route, baud_rate);
        Ok(())
    }

    /// Current debug channel, `None` until enabled.
    pub fn debug_uart(&self) -> Option<DebugUart> {
        self.debug_uart
    }

    // ── Platform and bus bring-up ────────────────────────────────────────────

    /// One-time platform setup: peripheral interface settings, the reset
    /// line as an output, then every button pin as a pulled-up input
    /// interrupting on the configured edge.
    ///
    /// A second call returns [`PlatformError::AlreadyInitialized`] without
    /// touching the hardware. If a pin fails to configure the call may be
    /// retried; the peripheral interface setup is not run again.
    pub fn init(&mut self) -> Result<(), PlatformError<D::Error>> {
        if self.initialized.platform {
            warn!("{} platform init called twice", BOARD_NAME);
            return Err(PlatformError::AlreadyInitialized(Subsystem::Platform));
        }

        if !self.initialized.platform_configured {
            self.driver
                .configure_platform()
                .map_err(PlatformError::Driver)?;
            self.initialized.platform_configured = true;
        }

        self.driver
            .configure_gpio(RESET_PIN, GpioSettings::output())
            .map_err(PlatformError::Driver)?;

        let settings = GpioSettings::button(self.config.button_trigger);
        for button in Button::ALL {
            self.driver
                .configure_gpio(button.pin(), settings)
                .map_err(PlatformError::Driver)?;
            debug!("{} on {}", button, button.pin());
        }

        self.initialized.platform = true;
        info!("{} platform initialised", BOARD_NAME);
        Ok(())
    }

    /// Bring up the I2S bus.
    pub fn init_i2s(&mut self) -> Result<(), PlatformError<D::Error>> {
        self.ensure_ready(Subsystem::I2s, self.initialized.i2s)?;
        self.driver
            .init_i2s(&I2S_PINS)
            .map_err(PlatformError::Driver)?;
        self.initialized.i2s = true;
        info!("I2S up (WS {}, CLK {})", I2S_PINS.word_select, I2S_PINS.clock);
        Ok(())
    }

    /// Bring up the SPI bus with the configured settings.
    pub fn init_spi(&mut self) -> Result<(), PlatformError<D::Error>> {
        self.ensure_ready(Subsystem::Spi, self.initialized.spi)?;
        let spi = self.config.spi;
        self.driver
            .init_spi(&SPI_PINS, &spi)
            .map_err(PlatformError::Driver)?;
        self.initialized.spi = true;
        info!("SPI up at {} Hz (CLK {})", spi.frequency, SPI_PINS.clk);
        Ok(())
    }

    /// Bring up the I2C bus with the configured settings.
    pub fn init_i2c(&mut self) -> Result<(), PlatformError<D::Error>> {
        self.ensure_ready(Subsystem::I2c, self.initialized.i2c)?;
        let i2c = self.config.i2c;
        self.driver.init_i2c(&i2c).map_err(PlatformError::Driver)?;
        self.initialized.i2c = true;
        info!("I2C up at {} Hz", i2c.frequency);
        Ok(())
    }

    fn ensure_ready(
        &self,
        subsystem: Subsystem,
        already: bool,
    ) -> Result<(), PlatformError<D::Error>> {
        if !self.initialized.platform {
            warn!("{} init before platform init", subsystem);
            return Err(PlatformError::NotInitialized(subsystem));
        }
        if already {
            warn!("{} init called twice", subsystem);
            return Err(PlatformError::AlreadyInitialized(subsystem));
        }
        Ok(())
    }

    /// Returns `true` once `subsystem` has been brought up. For
    /// [`Subsystem::Transport`] this is the transport's open state.
    pub fn is_initialized(&self, subsystem: Subsystem) -> bool {
        match subsystem {
            Subsystem::Platform => self.initialized.platform,
            Subsystem::I2s => self.initialized.i2s,
            Subsystem::Spi => self.initialized.spi,
            Subsystem::I2c => self.initialized.i2c,
            Subsystem::Transport => self.transport.is_open(),
        }
    }

    // ── HCI transport ────────────────────────────────────────────────────────

    /// Register `handler` for inbound HCI data and open the transport.
    ///
    /// On success the started flag goes from `0` to nonzero. On any error the
    /// flag and the handler registration are left exactly as they were.
    pub fn transport_init(
        &mut self,
        handler: &'h mut dyn RxDataHandler,
    ) -> Result<(), PlatformError<D::Error>> {
        if !self.initialized.platform {
            warn!("HCI transport init before platform init");
            return Err(PlatformError::NotInitialized(Subsystem::Transport));
        }
        if self.transport.is_open() {
            return Err(PlatformError::TransportAlreadyOpen);
        }

        let transport = self.config.transport;
        if let Err(e) = self.driver.open_transport(&transport) {
            error!("HCI transport failed to open at {} baud", transport.baud_rate);
            return Err(PlatformError::Driver(e));
        }

        self.rx_handler = Some(handler);
        self.transport.on_opened();
        if self.config.debug_route.uses_hci_uart() {
            warn!("debug output shares the HCI UART");
        }
        info!("HCI transport open at {} baud", transport.baud_rate);
        Ok(())
    }

    /// Hand one inbound packet to the registered handler.
    ///
    /// Called by the transport glue when data arrives. The handler runs
    /// synchronously on the caller's context.
    pub fn deliver_rx(&mut self, op_code: OpCode, data: &[u8]) -> Result<(), PlatformError<D::Error>> {
        if !self.transport.is_open() {
            warn!("dropped {} bytes for {}: transport closed", data.len(), op_code);
            return Err(PlatformError::TransportClosed);
        }
        let Some(handler) = self.rx_handler.as_deref_mut() else {
            return Err(PlatformError::TransportClosed);
        };
        trace!("rx {} ({} bytes)", op_code, data.len());
        handler.on_rx_data(op_code, data);
        Ok(())
    }

    /// Close the HCI UART and give the handler back.
    ///
    /// Returns `Ok(None)` without touching the hardware if the transport was
    /// not open. If the driver fails to close the link, the transport stays
    /// open and the handler stays registered.
    pub fn transport_shutdown(
        &mut self,
    ) -> Result<Option<&'h mut dyn RxDataHandler>, PlatformError<D::Error>> {
        if !self.transport.is_open() {
            return Ok(self.rx_handler.take());
        }
        if let Err(e) = self.driver.close_transport() {
            error!("HCI transport failed to close");
            return Err(PlatformError::Driver(e));
        }
        self.transport.on_closed();
        info!("HCI transport closed");
        Ok(self.rx_handler.take())
    }

    /// Transport started flag: `0` closed, nonzero open.
    pub fn transport_started(&self) -> u8 {
        self.transport.started_flag()
    }

    /// Returns `true` while the transport is open.
    pub fn is_transport_open(&self) -> bool {
        self.transport.is_open()
    }

    // ── PTU FIFO ─────────────────────────────────────────────────────────────

    /// Select the PTU FIFO source.
    ///
    /// Routable sources are programmed through the driver first; if that
    /// fails the previous selection is kept. [`PtuFifoSource::Unknown`] is
    /// stored without touching the hardware.
    pub fn set_ptu_fifo(&mut self, source: PtuFifoSource) -> Result<(), PlatformError<D::Error>> {
        if source.is_routable() {
            self.driver
                .select_ptu_fifo(source)
                .map_err(PlatformError::Driver)?;
        } else {
            warn!("PTU FIFO source set to {}", source);
        }
        debug!("PTU FIFO source {} -> {}", self.ptu, source);
        self.ptu = source;
        Ok(())
    }

    /// Current PTU FIFO source.
    pub fn ptu_fifo(&self) -> PtuFifoSource {
        self.ptu
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Active configuration.
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Borrow the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Borrow the driver mutably.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consume the context and return the driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
