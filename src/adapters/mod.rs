// Adapters layer: concrete implementations of the domain ports.

pub mod qr_encoder;
pub mod storage;

pub use qr_encoder::QrImageEncoder;
pub use storage::LocalStorage;
