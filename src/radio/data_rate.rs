use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{registers, Nrf24, RadioError};
use crate::DataRate;

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set the over-the-air data rate.
    ///
    /// The rate occupies two non-adjacent RF_SETUP bits (RF_DR_LOW and
    /// RF_DR_HIGH); unrelated bits are preserved.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::RF_SETUP)?;
        let out = self.buf[1] & !DataRate::MASK | rate.into_bits();
        self.spi_write_byte(registers::RF_SETUP, out)
    }

    /// Decode the currently configured [`DataRate`] from the RF_SETUP
    /// register.
    pub fn get_data_rate(&mut self) -> Result<DataRate, RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::RF_SETUP)?;
        Ok(DataRate::from_bits(self.buf[1]))
    }
}
