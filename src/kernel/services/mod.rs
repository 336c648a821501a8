//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the kernel.
//! - `adapters`: OS/runtime specific implementations (IO/async).

#[cfg(feature = "shell")]
pub mod adapters;
pub mod bus;
pub mod host;
pub mod ports;

pub use bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
pub use host::KernelServiceHost;
