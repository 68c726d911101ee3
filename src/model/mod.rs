pub mod entry;

pub use entry::{Ownership, PortEntry, Proto, SockState, KERNEL_PROCESS_NAME, KERNEL_USER_NAME};
