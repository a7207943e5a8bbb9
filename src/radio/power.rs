use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{mnemonics, registers, Nrf24, RadioError};

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Wake the radio into standby mode.
    ///
    /// If the PWR_UP bit is already set, nothing is written and the
    /// Tpd2stby settling wait is skipped.
    pub fn power_up(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::CONFIG)?;
        let config = self.buf[1];
        if config & mnemonics::PWR_UP == 0 {
            self.spi_write_byte(registers::CONFIG, config | mnemonics::PWR_UP)?;
            // Tpd2stby: the radio must pass through standby before CE
            // may go high, up to 5 ms per the datasheet
            self.delay.delay_ms(5);
        }
        Ok(())
    }

    /// Put the radio in its lowest power state.
    ///
    /// CE is driven low first; a sleeping radio must not be armed.
    pub fn power_down(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.ce_pin.set_low().map_err(RadioError::Pin)?;
        self.spi_read(1, registers::CONFIG)?;
        let config = self.buf[1];
        self.spi_write_byte(registers::CONFIG, config & !mnemonics::PWR_UP)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::{commands, mnemonics, registers};
    use crate::spi_test_expects;
    use crate::test::mk_radio;
    use embedded_hal_mock::eh1::digital::{State as PinState, Transaction as PinTransaction};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn power_up_from_cold() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x0Cu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0Eu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let (mut radio, mut spi_mock, mut pin_mock) = mk_radio(&[], &spi_expectations);
        radio.power_up().unwrap();
        spi_mock.done();
        pin_mock.done();
    }

    #[test]
    pub fn power_up_already_powered() {
        // the PWR_UP bit is set, so no write follows the read
        let spi_expectations = spi_test_expects![(
            vec![registers::CONFIG, 0u8],
            vec![0xEu8, 0x0Cu8 | mnemonics::PWR_UP],
        ),];
        let (mut radio, mut spi_mock, mut pin_mock) = mk_radio(&[], &spi_expectations);
        radio.power_up().unwrap();
        spi_mock.done();
        pin_mock.done();
    }

    #[test]
    pub fn power_down() {
        let pin_expectations = [PinTransaction::set(PinState::Low)];
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x0Eu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0Cu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let (mut radio, mut spi_mock, mut pin_mock) = mk_radio(&pin_expectations, &spi_expectations);
        radio.power_down().unwrap();
        spi_mock.done();
        pin_mock.done();
    }
}
