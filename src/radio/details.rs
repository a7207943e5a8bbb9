//! Human-readable configuration dumps for debugging a live radio.

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

#[cfg(any(feature = "std", feature = "defmt"))]
use super::registers;
use super::{Nrf24, RadioError};

#[cfg(feature = "std")]
extern crate std;

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Read a 5-byte address register.
    ///
    /// Useful for wiring diagnostics: a chip that never responds
    /// leaves the bus idle, so RX_ADDR_P0 reads back all zeros instead
    /// of its factory default of `0xE7E7E7E7E7`.
    pub fn read_address(&mut self, reg: u8) -> Result<[u8; 5], RadioError<SPI::Error, DO::Error>> {
        self.spi_read(5, reg)?;
        let mut address = [0u8; 5];
        address.copy_from_slice(&self.buf[1..6]);
        Ok(address)
    }

    /// Dump the radio's addressing, pipe, RF and feature registers to
    /// the console, the decoded STATUS byte first.
    #[cfg(feature = "std")]
    pub fn print_details(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        use std::println;

        let flags = self.update()?;
        println!(
            "STATUS\t\t= RX_DR={} TX_DS={} MAX_RT={} RX_P_NO={} TX_FULL={}",
            flags.rx_dr() as u8,
            flags.tx_ds() as u8,
            flags.tx_df() as u8,
            flags.rx_pipe(),
            flags.tx_full() as u8
        );

        let p0 = self.read_address(registers::RX_ADDR_P0)?;
        let p1 = self.read_address(registers::RX_ADDR_P0 + 1)?;
        println!("RX_ADDR_P0-1\t= {p0:02x?} {p1:02x?}");
        for pipe in 2..6 {
            self.spi_read(1, registers::RX_ADDR_P0 + pipe)?;
            std::print!("RX_ADDR_P{pipe}\t= {:#04x}  ", self.buf[1]);
        }
        println!();
        let tx = self.read_address(registers::TX_ADDR)?;
        println!("TX_ADDR\t\t= {tx:02x?}");

        std::print!("RX_PW_P0-5\t=");
        for pipe in 0..6 {
            self.spi_read(1, registers::RX_PW_P0 + pipe)?;
            std::print!(" {:#04x}", self.buf[1]);
        }
        println!();

        for (name, reg) in [
            ("EN_AA\t", registers::EN_AA),
            ("EN_RXADDR", registers::EN_RXADDR),
            ("RF_CH\t", registers::RF_CH),
            ("RF_SETUP", registers::RF_SETUP),
            ("CONFIG\t", registers::CONFIG),
            ("DYNPD\t", registers::DYNPD),
            ("FEATURE\t", registers::FEATURE),
        ] {
            self.spi_read(1, reg)?;
            println!("{name}\t= {:#04x}", self.buf[1]);
        }

        println!("Power level\t= {}", self.get_pa_level()?);
        println!("Data rate\t= {}", self.get_data_rate()?);
        Ok(())
    }

    /// Dump the radio's addressing, pipe, RF and feature registers via
    /// `defmt`, the decoded STATUS byte first.
    #[cfg(all(feature = "defmt", not(feature = "std")))]
    pub fn print_details(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        let flags = self.update()?;
        defmt::println!("{}", flags);

        let p0 = self.read_address(registers::RX_ADDR_P0)?;
        let p1 = self.read_address(registers::RX_ADDR_P0 + 1)?;
        defmt::println!("RX_ADDR_P0-1\t= {=[u8; 5]:#x} {=[u8; 5]:#x}", p0, p1);
        for pipe in 2..6 {
            self.spi_read(1, registers::RX_ADDR_P0 + pipe)?;
            defmt::println!("RX_ADDR_P{=u8}\t= {=u8:#x}", pipe, self.buf[1]);
        }
        let tx = self.read_address(registers::TX_ADDR)?;
        defmt::println!("TX_ADDR\t\t= {=[u8; 5]:#x}", tx);

        for pipe in 0..6 {
            self.spi_read(1, registers::RX_PW_P0 + pipe)?;
            defmt::println!("RX_PW_P{=u8}\t= {=u8:#x}", pipe, self.buf[1]);
        }

        for (name, reg) in [
            ("EN_AA\t", registers::EN_AA),
            ("EN_RXADDR", registers::EN_RXADDR),
            ("RF_CH\t", registers::RF_CH),
            ("RF_SETUP", registers::RF_SETUP),
            ("CONFIG\t", registers::CONFIG),
            ("DYNPD\t", registers::DYNPD),
            ("FEATURE\t", registers::FEATURE),
        ] {
            self.spi_read(1, reg)?;
            defmt::println!("{=str}\t= {=u8:#x}", name, self.buf[1]);
        }

        defmt::println!("Power level\t= {}", self.get_pa_level()?);
        defmt::println!("Data rate\t= {}", self.get_data_rate()?);
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::registers;
    use crate::spi_test_expects;
    use crate::test::mk_radio;
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn read_address() {
        // a present, unconfigured chip answers with its factory default
        let spi_expectations = spi_test_expects![(
            vec![registers::RX_ADDR_P0, 0u8, 0u8, 0u8, 0u8, 0u8],
            vec![0xEu8, 0xE7, 0xE7, 0xE7, 0xE7, 0xE7],
        ),];
        let (mut radio, mut spi_mock, mut pin_mock) = mk_radio(&[], &spi_expectations);
        assert_eq!(
            radio.read_address(registers::RX_ADDR_P0).unwrap(),
            [0xE7u8; 5]
        );
        spi_mock.done();
        pin_mock.done();
    }
}
