//! Parameter codec
//!
//! Bidirectional mapping between a [`ParamTable`](crate::params::ParamTable),
//! the ryzenadj argument string, and the persisted settings record.
//!
//! Token grammar (canonical parameter order, disabled parameters absent):
//! - `ScaledDecimal`: `--{name}={value}000` — the suffix is literal text
//! - `PlainDecimal`:  `--{name}={value}`
//! - `HexCurrent`:    `--{name}=0x{value:X}`
//!
//! The settings record is the same token sequence prefixed with an executable
//! reference, e.g. `ryzenadj.exe --stapm-limit=15000 --tctl-temp=80`.

mod decode;
mod encode;
mod error;

pub use decode::decode;
pub use encode::{encode_args, encode_record, encode_tokens};
pub use error::DecodeWarning;
