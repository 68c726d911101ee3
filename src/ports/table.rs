use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::classify::classify;
use super::decode::{decode_addr_port, decode_state, Family};
use super::inode::InodeIndex;
use super::resolve;
use crate::model::{PortEntry, Proto, SockState};

/// Parse one /proc/net socket table into entries.
///
/// Record layout (whitespace-separated, after a header line):
/// field 1 = `local_address` as ADDR:PORT hex, field 3 = state code,
/// field 9 = socket inode. Lines with fewer than 10 fields, or with a
/// malformed address field, are dropped.
///
/// TCP keeps only LISTEN; UDP keeps everything. A table that cannot be
/// opened (family disabled, permissions) yields an empty vec, never an
/// error.
pub fn parse_net_table(
    path: &Path,
    proto: Proto,
    family: Family,
    index: &InodeIndex,
    current_uid: &str,
) -> Vec<PortEntry> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            debug!("skipping {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if lineno == 0 {
            // header
            continue;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 10 {
            continue;
        }

        let (local_addr, local_port) = decode_addr_port(fields[1], family);
        if local_port.is_empty() || local_addr.is_empty() {
            continue;
        }

        let state = decode_state(proto, fields[3]);
        if proto == Proto::Tcp && state != SockState::Listen {
            continue;
        }

        let pid = fields[9]
            .parse::<u64>()
            .ok()
            .and_then(|inode| index.get(&inode).copied())
            .unwrap_or(0);

        // No fd table references this inode: kernel-owned (or orphaned, or
        // hidden from us by permissions). No point asking /proc about PID 0.
        if pid == 0 {
            entries.push(PortEntry::kernel(proto, state, local_addr, local_port));
            continue;
        }

        let meta = resolve::resolve(pid);
        let tag = classify(&meta.uid, current_uid, pid);
        entries.push(PortEntry {
            proto,
            state,
            local_addr,
            local_port,
            pid,
            process_name: meta.name,
            user_name: meta.user,
            tag,
        });
    }

    entries
}
