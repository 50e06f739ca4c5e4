#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub, clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

#[cfg(all(not(feature = "std"), not(feature = "embedded")))]
compile_error!("Either 'std' or 'embedded' feature must be enabled.");

extern crate alloc;

#[macro_use]
mod log;

mod error;
pub use error::{Error, Position, Result};
pub mod descriptor;
pub use descriptor::TypeDescriptor;
pub mod describe;
pub use describe::{descriptor_of, Describe};
mod classify;
pub use classify::{classify, type_name, wire_type, wire_type_name};
mod wire_type;
pub use wire_type::WireType;
pub mod method;
pub use method::MethodAttributes;
pub mod service;
pub use service::ServiceInfo;
