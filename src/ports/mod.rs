//! The socket-to-process resolution pipeline: scan the kernel's socket
//! tables, join them against per-process fd tables by socket inode, and
//! enrich each record with process, user, and ownership info.

pub mod classify;
pub mod decode;
pub mod inode;
pub mod kill;
pub mod resolve;
pub mod table;

use std::path::Path;

use decode::Family;
use table::parse_net_table;

use crate::model::{PortEntry, Proto};

/// The four socket tables, in the fixed order the output sequence follows:
/// TCP before UDP, IPv4 before IPv6.
const NET_SOURCES: [(&str, Proto, Family); 4] = [
    ("/proc/net/tcp", Proto::Tcp, Family::V4),
    ("/proc/net/tcp6", Proto::Tcp, Family::V6),
    ("/proc/net/udp", Proto::Udp, Family::V4),
    ("/proc/net/udp6", Proto::Udp, Family::V6),
];

/// One full listing pass: build the inode index, then parse each table
/// against it. Never fails; any unreadable source just contributes nothing.
pub fn list_ports() -> Vec<PortEntry> {
    let index = inode::build_inode_index();
    let current_uid = users::get_current_uid().to_string();

    let mut entries = Vec::new();
    for (path, proto, family) in NET_SOURCES {
        entries.extend(parse_net_table(
            Path::new(path),
            proto,
            family,
            &index,
            &current_uid,
        ));
    }
    entries
}
