use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{commands, mnemonics, registers, Nrf24, RadioError};
use crate::StatusFlags;

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Refresh the cached STATUS byte with a NOP probe and decode it.
    pub fn update(&mut self) -> Result<StatusFlags, RadioError<SPI::Error, DO::Error>> {
        self.spi_read(0, commands::NOP)?;
        Ok(StatusFlags::from_bits(self.status))
    }

    /// Decode the STATUS byte echoed by the most recent SPI
    /// transaction, without touching the hardware.
    pub fn get_status_flags(&self) -> StatusFlags {
        StatusFlags::from_bits(self.status)
    }

    /// Clear the radio's latched event flags.
    ///
    /// The chip uses write-to-clear semantics: each selected flag is
    /// written back as 1. Flags passed as `false` stay latched.
    pub fn clear_status_flags(
        &mut self,
        rx_dr: bool,
        tx_ds: bool,
        tx_df: bool,
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        let mut out = 0;
        if rx_dr {
            out |= mnemonics::MASK_RX_DR;
        }
        if tx_ds {
            out |= mnemonics::MASK_TX_DS;
        }
        if tx_df {
            out |= mnemonics::MASK_MAX_RT;
        }
        self.spi_write_byte(registers::STATUS, out)
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
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn update() {
        let spi_expectations = spi_test_expects![(
            vec![commands::NOP],
            vec![mnemonics::MASK_RX_DR | 0x0Au8],
        ),];
        let (mut radio, mut spi_mock, mut pin_mock) = mk_radio(&[], &spi_expectations);
        let flags = radio.update().unwrap();
        assert!(flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(!flags.tx_df());
        assert_eq!(flags.rx_pipe(), 5);
        // the cached byte decodes the same without another transaction
        assert_eq!(radio.get_status_flags().into_bits(), flags.into_bits());
        spi_mock.done();
        pin_mock.done();
    }

    #[test]
    pub fn clear_status_flags() {
        let spi_expectations = spi_test_expects![
            (
                vec![
                    registers::STATUS | commands::W_REGISTER,
                    mnemonics::MASK_RX_DR | mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT,
                ],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::STATUS | commands::W_REGISTER, mnemonics::MASK_MAX_RT],
                vec![0xEu8, 0u8],
            ),
        ];
        let (mut radio, mut spi_mock, mut pin_mock) = mk_radio(&[], &spi_expectations);
        radio.clear_status_flags(true, true, true).unwrap();
        radio.clear_status_flags(false, false, true).unwrap();
        spi_mock.done();
        pin_mock.done();
    }
}
