//! The driver core: SPI register access and radio bring-up.

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

mod channel;
mod constants;
mod data_rate;
mod details;
mod features;
mod fifo;
mod listen;
mod pa_level;
mod payload;
mod pipe;
mod power;
mod status;
pub use constants::{commands, mnemonics, registers};

/// An collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioError<SPI, DO> {
    /// A SPI transaction failed.
    Spi(SPI),
    /// Driving the CE pin failed.
    Pin(DO),
    /// The radio returned a value that is impossible for a functioning
    /// chip, meaning data was corrupted on the SPI lines.
    BinaryCorruption,
}

/// The fixed payload slot size and the upper bound for dynamic payloads.
pub const MAX_PAYLOAD_LENGTH: u8 = 32;

/// A driver for a single nRF24L01(+) transceiver.
///
/// One `Nrf24` value is the exclusive owner of its CE pin and of the
/// CSN line wrapped by its [`SpiDevice`]. Chip state is not mirrored in
/// memory; every query goes back to the hardware registers.
pub struct Nrf24<SPI, DO, DELAY> {
    spi: SPI,
    ce_pin: DO,
    delay: DELAY,
    /// Scratch frame: 1 command byte + up to 32 data bytes.
    buf: [u8; 33],
    /// The STATUS byte echoed by the most recent SPI transaction.
    status: u8,
    payload_length: u8,
    dynamic_payloads: bool,
    dynamic_ack: bool,
}

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate a driver for the radio wired to the given `spi` bus
    /// and `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined when
    /// instantiating the [`SpiDevice`] object (passed to the `spi`
    /// parameter); it frames every register access as one atomic
    /// transaction.
    pub fn new(ce_pin: DO, spi: SPI, delay: DELAY) -> Nrf24<SPI, DO, DELAY> {
        Nrf24 {
            spi,
            ce_pin,
            delay,
            buf: [0u8; 33],
            status: 0,
            payload_length: MAX_PAYLOAD_LENGTH,
            dynamic_payloads: false,
            dynamic_ack: false,
        }
    }

    /// Bring the radio from its power-on state into a configured
    /// standby: ACK payloads (which require dynamic payload lengths),
    /// dynamic ACK control, and a channel away from the crowded default.
    ///
    /// Call this before any other operation. Calling it again is
    /// harmless; every step is idempotent.
    pub fn init(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.ce_pin.set_low().map_err(RadioError::Pin)?;
        // settling time after power-on reset, before configuration sticks
        self.delay.delay_ms(5);

        self.enable_ack_payloads()?;
        self.enable_dynamic_ack()?;
        self.set_channel(76)
    }

    pub(crate) fn spi_transfer(&mut self, len: u8) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi
            .transfer_in_place(&mut self.buf[..len as usize])
            .map_err(RadioError::Spi)?;
        self.status = self.buf[0];
        Ok(())
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self.status
    /// ```
    pub(crate) fn spi_read(
        &mut self,
        len: u8,
        command: u8,
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.buf[0] = command;
        for byte in self.buf[1..=len as usize].iter_mut() {
            *byte = 0;
        }
        self.spi_transfer(len + 1)
    }

    pub(crate) fn spi_write_byte(
        &mut self,
        reg: u8,
        byte: u8,
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.buf[0] = reg | commands::W_REGISTER;
        self.buf[1] = byte;
        self.spi_transfer(2)
    }

    pub(crate) fn spi_write_buf(
        &mut self,
        reg: u8,
        data: &[u8],
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.buf[0] = reg | commands::W_REGISTER;
        self.buf[1..=data.len()].copy_from_slice(data);
        self.spi_transfer(data.len() as u8 + 1)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, mnemonics, registers};
    use crate::spi_test_expects;
    use crate::test::mk_radio;
    use embedded_hal_mock::eh1::digital::{State as PinState, Transaction as PinTransaction};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn init() {
        let pin_expectations = [PinTransaction::set(PinState::Low)];

        let spi_expectations = spi_test_expects![
            // enable_ack_payloads() cascades into enable_dynamic_payloads()
            (vec![registers::FEATURE, 0u8], vec![0xEu8, 0u8]),
            (
                vec![registers::FEATURE | commands::W_REGISTER, mnemonics::EN_DPL],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::DYNPD | commands::W_REGISTER, mnemonics::ALL_PIPES],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::FEATURE, 0u8],
                vec![0xEu8, mnemonics::EN_DPL],
            ),
            (
                vec![
                    registers::FEATURE | commands::W_REGISTER,
                    mnemonics::EN_DPL | mnemonics::EN_ACK_PAY,
                ],
                vec![0xEu8, 0u8],
            ),
            // enable_dynamic_ack()
            (
                vec![registers::FEATURE, 0u8],
                vec![0xEu8, mnemonics::EN_DPL | mnemonics::EN_ACK_PAY],
            ),
            (
                vec![
                    registers::FEATURE | commands::W_REGISTER,
                    mnemonics::EN_DPL | mnemonics::EN_ACK_PAY | mnemonics::EN_DYN_ACK,
                ],
                vec![0xEu8, 0u8],
            ),
            // set_channel(76)
            (
                vec![registers::RF_CH | commands::W_REGISTER, 76u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let (mut radio, mut spi_mock, mut pin_mock) = mk_radio(&pin_expectations, &spi_expectations);
        radio.init().unwrap();
        spi_mock.done();
        pin_mock.done();
    }
}
