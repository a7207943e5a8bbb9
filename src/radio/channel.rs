use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{registers, Nrf24, RadioError};

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set the radio's frequency to `2400 + channel` MHz.
    ///
    /// The nRF24L01 supports 126 channels. The specified `channel` is
    /// clamped to the range [0, 125]. Both ends of a link must use the
    /// same channel.
    pub fn set_channel(&mut self, channel: u8) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_write_byte(registers::RF_CH, channel.min(125))
    }

    /// See also [`Nrf24::set_channel()`].
    pub fn get_channel(&mut self) -> Result<u8, RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::RF_CH)?;
        Ok(self.buf[1])
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::{commands, registers};
    use crate::spi_test_expects;
    use crate::test::mk_radio;
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_channel_clamped() {
        let spi_expectations = spi_test_expects![
            // channel 130 is out of range; the register gets 125
            (
                vec![registers::RF_CH | commands::W_REGISTER, 125u8],
                vec![0xEu8, 0u8],
            ),
            // read it back
            (vec![registers::RF_CH, 0u8], vec![0xEu8, 125u8]),
        ];
        let (mut radio, mut spi_mock, mut pin_mock) = mk_radio(&[], &spi_expectations);
        radio.set_channel(130).unwrap();
        assert_eq!(radio.get_channel().unwrap(), 125);
        spi_mock.done();
        pin_mock.done();
    }

    #[test]
    pub fn set_channel_in_range() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::RF_CH | commands::W_REGISTER, 124u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::RF_CH, 0u8], vec![0xEu8, 124u8]),
        ];
        let (mut radio, mut spi_mock, mut pin_mock) = mk_radio(&[], &spi_expectations);
        radio.set_channel(124).unwrap();
        assert_eq!(radio.get_channel().unwrap(), 124);
        spi_mock.done();
        pin_mock.done();
    }
}
