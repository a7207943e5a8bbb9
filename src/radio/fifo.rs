use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{commands, registers, Nrf24, RadioError};
use crate::FifoState;

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Is there a payload waiting in the RX FIFO?
    pub fn data_available(&mut self) -> Result<bool, RadioError<SPI::Error, DO::Error>> {
        self.available_pipe(&mut None)
    }

    /// Like [`Nrf24::data_available()`], but when a payload is waiting
    /// and `pipe` is `Some`, it is overwritten with the number of the
    /// pipe that received it.
    pub fn available_pipe(
        &mut self,
        pipe: &mut Option<u8>,
    ) -> Result<bool, RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::FIFO_STATUS)?;
        if self.buf[1] & 1 == 0 {
            // RX FIFO is not empty
            if let Some(rx_pipe) = pipe {
                self.spi_read(1, registers::STATUS)?;
                *rx_pipe = self.buf[1] >> 1 & 7;
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// Discard all 3 levels of the radio's RX FIFO.
    pub fn flush_rx(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_read(0, commands::FLUSH_RX)
    }

    /// Discard all 3 levels of the radio's TX FIFO.
    pub fn flush_tx(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_read(0, commands::FLUSH_TX)
    }

    /// Decode the state of the TX FIFO (`about_tx == true`) or the RX
    /// FIFO from the FIFO_STATUS register.
    pub fn get_fifo_state(
        &mut self,
        about_tx: bool,
    ) -> Result<FifoState, RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::FIFO_STATUS)?;
        let offset = about_tx as u8 * 4;
        match self.buf[1] >> offset & 3 {
            1 => Ok(FifoState::Empty),
            2 => Ok(FifoState::Full),
            _ => Ok(FifoState::Occupied),
        }
    }
}
