use std::path::Path;

use procfs::process::Process;

/// Display metadata for the process owning a socket.
#[derive(Debug, Clone)]
pub struct ProcMeta {
    pub name: String,
    pub user: String,
    /// Real uid as text; empty when the status file was unreadable.
    pub uid: String,
}

/// Best-effort name and user lookup for a PID. Every failure degrades to a
/// sentinel (`?`, empty uid, `uid=N` name) instead of erroring out, since
/// the process may be gone or owned by someone we cannot inspect.
pub fn resolve(pid: i32) -> ProcMeta {
    let (user, uid) = process_user(pid);
    ProcMeta {
        name: process_name(pid),
        user,
        uid,
    }
}

/// Resolution order: comm, then exe link basename, then the first cmdline
/// token's basename. `?` if all three fail.
fn process_name(pid: i32) -> String {
    let proc = match Process::new(pid) {
        Ok(p) => p,
        Err(_) => return "?".to_string(),
    };

    if let Ok(stat) = proc.stat() {
        if !stat.comm.is_empty() {
            return stat.comm;
        }
    }

    if let Ok(exe) = proc.exe() {
        if let Some(base) = exe.file_name() {
            return base.to_string_lossy().into_owned();
        }
    }

    if let Ok(cmdline) = proc.cmdline() {
        if let Some(first) = cmdline.first() {
            if !first.is_empty() {
                return Path::new(first)
                    .file_name()
                    .map(|b| b.to_string_lossy().into_owned())
                    .unwrap_or_else(|| first.clone());
            }
        }
    }

    "?".to_string()
}

/// Real uid from the `Uid:` line of the status file, resolved to an
/// account name where possible. The real uid is what ownership means here:
/// a setuid binary still belongs to the user who ran it. An unknown uid
/// keeps a synthetic `uid=N` name so the column is never blank.
fn process_user(pid: i32) -> (String, String) {
    let proc = match Process::new(pid) {
        Ok(p) => p,
        Err(_) => return ("?".to_string(), String::new()),
    };

    let uid = match proc.status() {
        Ok(status) => status.ruid,
        Err(_) => return ("?".to_string(), String::new()),
    };
    let uid_str = uid.to_string();

    match users::get_user_by_uid(uid) {
        Some(u) => (u.name().to_string_lossy().into_owned(), uid_str),
        None => (format!("uid={}", uid_str), uid_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_self() {
        let meta = resolve(std::process::id() as i32);
        assert_ne!(meta.name, "?");
        assert!(!meta.uid.is_empty());
        assert_eq!(meta.uid, users::get_current_uid().to_string());
    }

    #[test]
    fn test_uid_is_real_uid_from_status() {
        // The reported uid must be the status file's Uid: first token (the
        // real uid), not the /proc directory ownership.
        let me = Process::myself().expect("self");
        let ruid = me.status().expect("status").ruid;
        let meta = resolve(std::process::id() as i32);
        assert_eq!(meta.uid, ruid.to_string());
    }

    #[test]
    fn test_resolve_missing_pid_degrades() {
        // PID near the default pid_max; extremely unlikely to exist.
        let meta = resolve(4_194_000);
        assert_eq!(meta.name, "?");
        assert_eq!(meta.user, "?");
        assert!(meta.uid.is_empty());
    }
}
