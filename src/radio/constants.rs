/// Register offsets of the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;
}

/// SPI command opcodes of the nRF24L01.
pub mod commands {
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const W_TX_PAYLOAD_NO_ACK: u8 = 0xB0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// Bit mnemonics for the registers above.
pub mod mnemonics {
    // STATUS register (write 1 to clear)
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    // CONFIG register
    pub const PWR_UP: u8 = 1 << 1;
    pub const PRIM_RX: u8 = 1;

    // FEATURE register
    pub const EN_DPL: u8 = 1 << 2;
    pub const EN_ACK_PAY: u8 = 1 << 1;
    pub const EN_DYN_ACK: u8 = 1;

    // one bit per pipe, used with EN_RXADDR, EN_AA and DYNPD
    pub const ALL_PIPES: u8 = 0x3F;
}
