use std::collections::HashMap;

use log::debug;
use procfs::process::FDTarget;

/// Socket inode -> owning PID, rebuilt from scratch for every listing pass.
///
/// Last writer wins on duplicate inodes; within one scan each inode has a
/// single owner, but a scan racing process churn may observe it twice.
pub type InodeIndex = HashMap<u64, i32>;

/// Walk every readable process fd table and record which PID holds each
/// socket inode.
///
/// Never fails: processes we cannot inspect (other users, vanished PIDs)
/// simply contribute no mappings, and an empty index is a valid result.
pub fn build_inode_index() -> InodeIndex {
    let mut index = InodeIndex::new();

    let procs = match procfs::process::all_processes() {
        Ok(p) => p,
        Err(e) => {
            debug!("cannot enumerate processes: {}", e);
            return index;
        }
    };

    for proc in procs.flatten() {
        let fds = match proc.fd() {
            Ok(fds) => fds,
            // Typically EACCES on another user's process.
            Err(_) => continue,
        };
        for fd in fds.flatten() {
            match fd.target {
                FDTarget::Socket(inode) | FDTarget::Net(inode) => {
                    index.insert(inode, proc.pid);
                }
                _ => {}
            }
        }
    }

    debug!("inode index: {} sockets", index.len());
    index
}
