//! A platform-agnostic driver for the nRF24L01(+) 2.4 GHz transceiver,
//! built on [`embedded-hal`](https://docs.rs/embedded-hal) traits.
//!
//! ## Basic API
//!
//! - [`Nrf24::new()`]
//! - [`Nrf24::init()`]
//! - [`Nrf24::open_tx_pipe()`]
//! - [`Nrf24::open_rx_pipe()`]
//! - [`Nrf24::start_listening()`]
//! - [`Nrf24::stop_listening()`]
//! - [`Nrf24::send()`]
//! - [`Nrf24::read()`]
//! - [`Nrf24::data_available()`]
//!
//! ## Configuration API
//!
//! - [`Nrf24::set_channel()`] / [`Nrf24::get_channel()`]
//! - [`Nrf24::set_pa_level()`] / [`Nrf24::get_pa_level()`]
//! - [`Nrf24::set_data_rate()`] / [`Nrf24::get_data_rate()`]
//! - [`Nrf24::set_auto_retries()`]
//! - [`Nrf24::set_payload_length()`]
//! - [`Nrf24::enable_dynamic_payloads()`]
//! - [`Nrf24::enable_ack_payloads()`]
//! - [`Nrf24::enable_dynamic_ack()`]
//! - [`Nrf24::disable_features()`]
//!
//! ## Advanced API
//!
//! - [`Nrf24::power_up()`] / [`Nrf24::power_down()`]
//! - [`Nrf24::update()`] / [`Nrf24::get_status_flags()`]
//! - [`Nrf24::clear_status_flags()`]
//! - [`Nrf24::flush_rx()`] / [`Nrf24::flush_tx()`]
//! - [`Nrf24::get_fifo_state()`]
//! - [`Nrf24::get_dynamic_payload_length()`]
//! - [`Nrf24::send_message()`] / [`Nrf24::read_message()`]
#![no_std]

mod message;
pub use message::Message;
pub mod radio;
#[doc(inline)]
pub use radio::{Nrf24, RadioError, MAX_PAYLOAD_LENGTH};
mod types;
pub use types::{DataRate, FifoState, PaLevel, StatusFlags};
