use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{commands, mnemonics, registers, Nrf24, RadioError, MAX_PAYLOAD_LENGTH};
use crate::Message;

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set the static payload width used when dynamic payloads are
    /// disabled.
    ///
    /// The width is clamped to 32 bytes and applied to all 6 pipes.
    /// Both ends of a link must use the same width.
    pub fn set_payload_length(&mut self, length: u8) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        let len = length.min(MAX_PAYLOAD_LENGTH);
        for pipe in 0..6 {
            self.spi_write_byte(registers::RX_PW_P0 + pipe, len)?;
        }
        self.payload_length = len;
        Ok(())
    }

    /// Load `buf` into the TX FIFO and pulse CE to launch it.
    ///
    /// Writing the FIFO alone transmits nothing: the CE pulse is what
    /// actually triggers transmission. 20 us is held, twice the
    /// datasheet minimum.
    fn write_payload(
        &mut self,
        buf: &[u8],
        ask_no_ack: bool,
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        let frame_length = if self.dynamic_payloads {
            MAX_PAYLOAD_LENGTH
        } else {
            self.payload_length
        } as usize;
        let len = buf.len().min(frame_length);

        self.buf[0] = if ask_no_ack && self.dynamic_ack {
            commands::W_TX_PAYLOAD_NO_ACK
        } else {
            commands::W_TX_PAYLOAD
        };
        self.buf[1..=len].copy_from_slice(&buf[..len]);
        let len = if self.dynamic_payloads {
            len
        } else {
            // the fixed slot always carries the full width, zero padded
            for byte in self.buf[len + 1..=frame_length].iter_mut() {
                *byte = 0;
            }
            frame_length
        };
        self.spi_transfer(len as u8 + 1)?;

        self.ce_pin.set_high().map_err(RadioError::Pin)?;
        self.delay.delay_us(20);
        self.ce_pin.set_low().map_err(RadioError::Pin)
    }

    /// Transmit `buf` to the address given to [`Nrf24::open_tx_pipe()`].
    ///
    /// Input longer than 32 bytes is truncated; in fixed-width mode a
    /// shorter input is zero padded.
    ///
    /// Returns `false` when the chip exhausted its auto-retransmit
    /// budget without an acknowledgement. The failed payload is then
    /// flushed from the TX FIFO and the MAX_RT latch cleared, so the
    /// radio is ready for the next attempt. With `ask_no_ack` set (and
    /// the dynamic-ack feature enabled) the peer sends no
    /// acknowledgement and failure cannot be observed.
    pub fn send(
        &mut self,
        buf: &[u8],
        ask_no_ack: bool,
    ) -> Result<bool, RadioError<SPI::Error, DO::Error>> {
        self.write_payload(buf, ask_no_ack)?;

        self.spi_read(1, registers::STATUS)?;
        if self.buf[1] & mnemonics::MASK_MAX_RT != 0 {
            self.flush_tx()?;
            self.spi_write_byte(registers::STATUS, mnemonics::MASK_MAX_RT)?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Fetch the payload at the top of the RX FIFO into `buf`.
    ///
    /// In fixed-width mode the full slot is transferred; with dynamic
    /// payloads only the received length is. Returns how many bytes
    /// were copied into `buf` (the payload length, unless `buf` is
    /// shorter).
    pub fn read(&mut self, buf: &mut [u8]) -> Result<u8, RadioError<SPI::Error, DO::Error>> {
        let len = if self.dynamic_payloads {
            self.get_dynamic_payload_length()?
        } else {
            self.payload_length
        };
        self.spi_read(len, commands::R_RX_PAYLOAD)?;
        let count = (len as usize).min(buf.len());
        buf[..count].copy_from_slice(&self.buf[1..=count]);
        Ok(count as u8)
    }

    /// Query the length of the payload at the top of the RX FIFO.
    ///
    /// Only meaningful while dynamic payloads are enabled. A value
    /// above 32 is impossible for a functioning chip and is reported
    /// as [`RadioError::BinaryCorruption`].
    pub fn get_dynamic_payload_length(&mut self) -> Result<u8, RadioError<SPI::Error, DO::Error>> {
        self.spi_read(1, commands::R_RX_PL_WID)?;
        if self.buf[1] > MAX_PAYLOAD_LENGTH {
            return Err(RadioError::BinaryCorruption);
        }
        Ok(self.buf[1])
    }

    /// Encode `message` with its [`Message`] contract and transmit it.
    pub fn send_message<M: Message>(
        &mut self,
        message: &M,
    ) -> Result<bool, RadioError<SPI::Error, DO::Error>> {
        let mut buf = [0u8; MAX_PAYLOAD_LENGTH as usize];
        message.encode(&mut buf[..M::LEN]);
        self.send(&buf[..M::LEN], false)
    }

    /// Fetch the next received payload and decode it with `M`'s
    /// [`Message`] contract.
    ///
    /// The peer must have encoded the payload with the same contract.
    pub fn read_message<M: Message>(&mut self) -> Result<M, RadioError<SPI::Error, DO::Error>> {
        let mut buf = [0u8; MAX_PAYLOAD_LENGTH as usize];
        self.read(&mut buf)?;
        Ok(M::decode(&buf[..M::LEN]))
    }
}
