use std::collections::HashSet;

use log::debug;
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use crate::model::PortEntry;

pub const NO_VALID_PIDS: &str = "no valid PIDs to kill";
pub const NO_MATCHING_PORTS: &str = "no matching PIDs for given ports";

/// Parse a comma-separated integer list, silently dropping blank segments
/// and unparsable tokens.
pub fn parse_int_list(s: &str) -> Vec<i32> {
    s.split(',')
        .filter_map(|t| t.trim().parse::<i32>().ok())
        .collect()
}

/// Send SIGTERM to each distinct positive PID, in first-seen order.
/// Returns one `PID <n>: <outcome>` line per attempt, or the sentinel when
/// nothing qualified.
pub fn kill_pids(pids: &[i32]) -> Vec<String> {
    kill_pids_with(pids, |pid| kill(Pid::from_raw(pid), Signal::SIGTERM))
}

/// Termination with an injected sender so the dedup/ordering contract is
/// testable without signaling live processes.
fn kill_pids_with<F>(pids: &[i32], mut send: F) -> Vec<String>
where
    F: FnMut(i32) -> nix::Result<()>,
{
    let mut seen = HashSet::new();
    let mut msgs = Vec::new();

    for &pid in pids {
        if pid <= 0 {
            continue;
        }
        if !seen.insert(pid) {
            continue;
        }

        debug!("sending SIGTERM to {}", pid);
        match send(pid) {
            Ok(()) => msgs.push(format!("PID {}: terminated", pid)),
            Err(Errno::ESRCH) => msgs.push(format!("PID {}: no such process", pid)),
            Err(e) => msgs.push(format!("PID {}: SIGTERM failed: {}", pid, e)),
        }
    }

    if msgs.is_empty() {
        msgs.push(NO_VALID_PIDS.to_string());
    }
    msgs
}

/// Resolve ports to PIDs by exact match on the entries' local port text
/// (kernel-owned entries excluded), then delegate to [`kill_pids`].
pub fn kill_by_ports(entries: &[PortEntry], ports: &[String]) -> Vec<String> {
    let mut pids = Vec::new();
    for port in ports {
        let port = port.trim();
        if port.is_empty() {
            continue;
        }
        for e in entries {
            if e.local_port == port && e.pid > 0 {
                pids.push(e.pid);
            }
        }
    }

    if pids.is_empty() {
        return vec![NO_MATCHING_PORTS.to_string()];
    }
    kill_pids(&pids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ownership, Proto, SockState};

    fn entry(port: &str, pid: i32) -> PortEntry {
        PortEntry {
            proto: Proto::Tcp,
            state: SockState::Listen,
            local_addr: "127.0.0.1".into(),
            local_port: port.into(),
            pid,
            process_name: "test".into(),
            user_name: "tester".into(),
            tag: Ownership::User,
        }
    }

    #[test]
    fn test_parse_int_list_drops_garbage() {
        assert_eq!(parse_int_list("80, ,abc,443"), vec![80, 443]);
        assert_eq!(parse_int_list(""), Vec::<i32>::new());
        assert_eq!(parse_int_list("1,2,3"), vec![1, 2, 3]);
        assert_eq!(parse_int_list("-5"), vec![-5]);
    }

    #[test]
    fn test_empty_input_sentinel() {
        assert_eq!(kill_pids_with(&[], |_| Ok(())), vec![NO_VALID_PIDS]);
    }

    #[test]
    fn test_nonpositive_pids_sentinel() {
        let mut attempts = Vec::new();
        let msgs = kill_pids_with(&[0, -5], |pid| {
            attempts.push(pid);
            Ok(())
        });
        assert!(attempts.is_empty());
        assert_eq!(msgs, vec![NO_VALID_PIDS]);
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let mut attempts = Vec::new();
        let msgs = kill_pids_with(&[100, 100, 200], |pid| {
            attempts.push(pid);
            Ok(())
        });
        assert_eq!(attempts, vec![100, 200]);
        assert_eq!(msgs, vec!["PID 100: terminated", "PID 200: terminated"]);
    }

    #[test]
    fn test_failure_does_not_abort_remaining() {
        let msgs = kill_pids_with(&[100, 200], |pid| {
            if pid == 100 {
                Err(Errno::ESRCH)
            } else {
                Ok(())
            }
        });
        assert_eq!(msgs, vec!["PID 100: no such process", "PID 200: terminated"]);
    }

    #[test]
    fn test_permission_failure_text() {
        let msgs = kill_pids_with(&[1], |_| Err(Errno::EPERM));
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].starts_with("PID 1: SIGTERM failed:"));
    }

    #[test]
    fn test_kill_by_ports_no_match_sentinel() {
        let entries = vec![entry("8080", 42)];
        let msgs = kill_by_ports(&entries, &["9999".to_string()]);
        assert_eq!(msgs, vec![NO_MATCHING_PORTS]);
    }

    #[test]
    fn test_kill_by_ports_skips_kernel_entries() {
        // PID 0 entries are never candidates, so only the sentinel can come out.
        let entries = vec![entry("53", 0)];
        let msgs = kill_by_ports(&entries, &["53".to_string()]);
        assert_eq!(msgs, vec![NO_MATCHING_PORTS]);
    }

    #[test]
    fn test_kill_by_ports_blank_ports_ignored() {
        let entries = vec![entry("8080", 42)];
        let msgs = kill_by_ports(&entries, &[" ".to_string(), String::new()]);
        assert_eq!(msgs, vec![NO_MATCHING_PORTS]);
    }
}
