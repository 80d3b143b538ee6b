pub mod chapter_panel;
pub mod cipher_puzzle;
pub mod confetti_layer;
pub mod howto;
pub mod intro;
pub mod lights_out;
pub mod qr_placeholder;
pub mod tools_puzzle;
pub mod voucher;
