//! Types shared across the driver's configuration and status APIs.

use core::fmt::{Display, Formatter, Result};

use bitfield_struct::bitfield;

/// Power Amplifier level. The unit dBm (decibel-milliwatts)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaLevel {
    /// -18 dBm output power
    Min,
    /// -12 dBm output power
    Low,
    /// -6 dBm output power
    High,
    /// 0 dBm output power
    Max,
}

impl PaLevel {
    /// The PA bits in the RF_SETUP register (bits 2:1).
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "min"),
            PaLevel::Low => write!(f, "low"),
            PaLevel::High => write!(f, "high"),
            PaLevel::Max => write!(f, "max"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "min"),
            PaLevel::Low => defmt::write!(fmt, "low"),
            PaLevel::High => defmt::write!(fmt, "high"),
            PaLevel::Max => defmt::write!(fmt, "max"),
        }
    }
}

/// How fast data moves through the air, in bits per second.
///
/// Both ends of a link must use the same rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// 1 Mbps
    Mbps1,
    /// 2 Mbps
    Mbps2,
    /// 250 Kbps
    Kbps250,
}

impl DataRate {
    /// The RF_DR_LOW (0x20) and RF_DR_HIGH (0x08) bits in the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x08,
            DataRate::Kbps250 => 0x20,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x08 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

/// The possible states of one of the radio's 3-level FIFOs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoState {
    /// All 3 levels of the FIFO are occupied.
    Full,
    /// No level of the FIFO is occupied.
    Empty,
    /// Some but not all levels of the FIFO are occupied.
    Occupied,
}

/// A decoded view of the radio's STATUS byte.
///
/// The STATUS register is echoed as the first byte of every SPI
/// transaction, so these flags come for free with any other operation.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// RX Data Ready: a payload arrived in the RX FIFO.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// TX Data Sent: a payload left the TX FIFO (and was acknowledged,
    /// if auto-ack applies).
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// TX Data Failed: the auto-retransmit budget was exhausted.
    #[bits(1, access = RO)]
    pub tx_df: bool,

    /// The number of the pipe that received the payload at the top of
    /// the RX FIFO. Values 6 and 7 mean the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// The TX FIFO cannot accept another payload.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}, rx_pipe: {}, tx_full: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{DataRate, PaLevel, StatusFlags};
    use std::{format, string::String};

    #[test]
    pub fn pa_level_round_trip() {
        for level in [PaLevel::Min, PaLevel::Low, PaLevel::High, PaLevel::Max] {
            assert_eq!(PaLevel::from_bits(level.into_bits()), level);
        }
    }

    #[test]
    pub fn pa_level_labels() {
        let labels: std::vec::Vec<String> =
            [PaLevel::Min, PaLevel::Low, PaLevel::High, PaLevel::Max]
                .iter()
                .map(|level| format!("{level}"))
                .collect();
        assert_eq!(labels, ["min", "low", "high", "max"]);
    }

    #[test]
    pub fn data_rate_round_trip() {
        for rate in [DataRate::Mbps1, DataRate::Mbps2, DataRate::Kbps250] {
            assert_eq!(DataRate::from_bits(rate.into_bits()), rate);
        }
    }

    #[test]
    pub fn status_flags_decode() {
        // RX_DR | MAX_RT, pipe 5, TX full
        let flags = StatusFlags::from_bits(0x5B);
        assert!(flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(flags.tx_df());
        assert_eq!(flags.rx_pipe(), 5);
        assert!(flags.tx_full());
    }
}
