pub mod constants;
pub mod digi_sys;
pub mod error;
pub mod filter;

pub use constants::MAX_LEN;
pub use digi_sys::DigiSys;
pub use error::{DigiSysError, Result};
pub use filter::Filter;
