use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{mnemonics, registers, Nrf24, RadioError};

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Enable dynamically sized payloads on all 6 pipes.
    ///
    /// Payloads then carry their true length (up to 32 bytes) over the
    /// air instead of occupying the fixed 32-byte slot.
    pub fn enable_dynamic_payloads(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::FEATURE)?;
        let out = self.buf[1] | mnemonics::EN_DPL;
        self.spi_write_byte(registers::FEATURE, out)?;
        self.spi_write_byte(registers::DYNPD, mnemonics::ALL_PIPES)?;
        self.dynamic_payloads = true;
        Ok(())
    }

    /// Enable appending payloads to auto-acknowledgement packets.
    ///
    /// ACK payloads are dynamically sized by nature, so this also
    /// enables dynamic payloads on all pipes.
    pub fn enable_ack_payloads(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.enable_dynamic_payloads()?;
        self.spi_read(1, registers::FEATURE)?;
        let out = self.buf[1] | mnemonics::EN_ACK_PAY;
        self.spi_write_byte(registers::FEATURE, out)
    }

    /// Allow disabling auto-acknowledgement per payload.
    ///
    /// Once enabled, [`Nrf24::send()`] can mark individual payloads
    /// with the no-ack command variant.
    pub fn enable_dynamic_ack(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::FEATURE)?;
        let out = self.buf[1] | mnemonics::EN_DYN_ACK;
        self.spi_write_byte(registers::FEATURE, out)?;
        self.dynamic_ack = true;
        Ok(())
    }

    /// Clear the FEATURE register and every pipe's dynamic-payload
    /// bit, returning the radio to fixed 32-byte payloads.
    pub fn disable_features(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_write_byte(registers::FEATURE, 0)?;
        self.spi_write_byte(registers::DYNPD, 0)?;
        self.dynamic_payloads = false;
        self.dynamic_ack = false;
        Ok(())
    }

    /// Configure the chip's automatic retransmission.
    ///
    /// `delay` is in steps of 250 us starting at 250 us; `count` is the
    /// number of retries before a transmission is reported failed, with
    /// 0 disabling auto-retransmit. Both are clamped to 15.
    pub fn set_auto_retries(
        &mut self,
        delay: u8,
        count: u8,
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        let out = (delay.min(15) << 4) | count.min(15);
        self.spi_write_byte(registers::SETUP_RETR, out)
    }
}
