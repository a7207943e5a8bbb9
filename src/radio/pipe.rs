use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{registers, Nrf24, RadioError};

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set the 5-byte address (LSB first) that [`Nrf24::send()`]
    /// transmits to.
    ///
    /// The same address is also written to RX pipe 0 because the chip
    /// only receives auto-acknowledgements on a pipe whose address
    /// matches the one it transmitted to.
    pub fn open_tx_pipe(
        &mut self,
        address: &[u8; 5],
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_write_buf(registers::TX_ADDR, address)?;
        self.spi_write_buf(registers::RX_ADDR_P0, address)
    }

    /// Set the receive address (LSB first) for one of the 6 pipes.
    ///
    /// Pipes 0 and 1 store a full 5-byte address. Pipes 2-5 store only
    /// the first byte of `address` and borrow the remaining 4 bytes
    /// from pipe 1, so give them addresses that differ from pipe 1 in
    /// the first byte only. Opening a pipe in range 2-5 also sets its
    /// enable bit. A `pipe` greater than 5 is ignored.
    pub fn open_rx_pipe(
        &mut self,
        pipe: u8,
        address: &[u8; 5],
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        if pipe > 5 {
            return Ok(());
        }
        if pipe < 2 {
            return self.spi_write_buf(registers::RX_ADDR_P0 + pipe, address);
        }
        self.spi_write_byte(registers::RX_ADDR_P0 + pipe, address[0])?;
        self.spi_read(1, registers::EN_RXADDR)?;
        let out = self.buf[1] | (1 << pipe);
        self.spi_write_byte(registers::EN_RXADDR, out)
    }
}
