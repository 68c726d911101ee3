use crate::error::Result;
use crate::model::PortEntry;

/// Print entries as an indented JSON array, the machine-consumption form.
pub fn print_json(entries: &[PortEntry]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(entries)?);
    Ok(())
}

/// Print entries as an aligned text table for non-interactive use.
pub fn print_table(entries: &[PortEntry]) {
    println!(
        "{:<9} {:<6} {:<6} {:<22} {:>7} {:<12} {:<8}",
        "STATE", "PORT", "PROTO", "PROCESS", "PID", "USER", "TAG"
    );
    for e in entries {
        let pid = if e.pid > 0 {
            e.pid.to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{:<9} {:<6} {:<6} {:<22} {:>7} {:<12} {:<8}",
            e.state,
            e.local_port,
            e.proto,
            fit_str(&e.process_name, 22),
            pid,
            fit_str(&e.user_name, 12),
            e.tag,
        );
    }
}

/// Truncate to `width` characters, marking the cut with "..".
pub fn fit_str(s: &str, width: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= width {
        s.to_string()
    } else if width > 2 {
        let head: String = chars[..width - 2].iter().collect();
        format!("{}..", head)
    } else {
        chars[..width].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ownership, Proto, SockState};

    #[test]
    fn test_fit_str_short() {
        assert_eq!(fit_str("nginx", 22), "nginx");
    }

    #[test]
    fn test_fit_str_truncates_with_marker() {
        assert_eq!(fit_str("averylongprocessname", 10), "averylon..");
    }

    #[test]
    fn test_fit_str_tiny_width() {
        assert_eq!(fit_str("abc", 2), "ab");
    }

    #[test]
    fn test_print_paths_do_not_panic() {
        let entries = vec![PortEntry {
            proto: Proto::Udp,
            state: SockState::Unconn,
            local_addr: "0.0.0.0".into(),
            local_port: "53".into(),
            pid: 0,
            process_name: "<kernel>".into(),
            user_name: "kernel".into(),
            tag: Ownership::Kernel,
        }];
        print_table(&entries);
        print_json(&entries).unwrap();
    }
}
