use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{registers, Nrf24, RadioError};
use crate::PaLevel;

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set the Power Amplifier output level.
    ///
    /// The level lands in the low bits of the RF_SETUP register along
    /// with the LNA gain bit; unrelated bits are preserved.
    pub fn set_pa_level(&mut self, level: PaLevel) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::RF_SETUP)?;
        let out = self.buf[1] & !(PaLevel::MASK | 1) | level.into_bits() | 1;
        self.spi_write_byte(registers::RF_SETUP, out)
    }

    /// Decode the currently configured [`PaLevel`] from the RF_SETUP
    /// register.
    pub fn get_pa_level(&mut self) -> Result<PaLevel, RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::RF_SETUP)?;
        Ok(PaLevel::from_bits(self.buf[1]))
    }
}
