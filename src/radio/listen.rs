use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{mnemonics, registers, Nrf24, RadioError};

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Put the radio in RX mode.
    ///
    /// Stale payloads left over from a previous session are flushed
    /// from the RX FIFO, and the latched status events are cleared.
    pub fn start_listening(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.ce_pin.set_low().map_err(RadioError::Pin)?;
        self.power_up()?;

        self.spi_read(1, registers::CONFIG)?;
        let config = self.buf[1];
        self.spi_write_byte(registers::CONFIG, config | mnemonics::PRIM_RX)?;
        self.clear_status_flags(true, true, true)?;

        self.ce_pin.set_high().map_err(RadioError::Pin)?;
        self.flush_rx()
    }

    /// Put the radio in TX mode.
    ///
    /// Leftover ACK payloads are flushed from the TX FIFO so the next
    /// [`Nrf24::send()`] transmits what it was given.
    pub fn stop_listening(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.ce_pin.set_low().map_err(RadioError::Pin)?;
        // Settling margin carried over from the reference behavior.
        // The datasheet's RX-to-standby time is orders of magnitude
        // shorter; see DESIGN.md.
        self.delay.delay_ms(200);

        self.spi_read(1, registers::CONFIG)?;
        let config = self.buf[1];
        self.spi_write_byte(registers::CONFIG, config & !mnemonics::PRIM_RX)?;
        self.clear_status_flags(true, true, true)?;

        self.flush_tx()?;
        self.power_up()
    }
}
