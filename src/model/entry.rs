use std::fmt;

use serde::Serialize;

/// Process name shown for sockets no process claims (inode not found in any
/// fd table -- kernel-owned or orphaned).
pub const KERNEL_PROCESS_NAME: &str = "<kernel>";
pub const KERNEL_USER_NAME: &str = "kernel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Proto {
    Tcp,
    Udp,
}

impl fmt::Display for Proto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proto::Tcp => write!(f, "tcp"),
            Proto::Udp => write!(f, "udp"),
        }
    }
}

/// Decoded socket state. Labels follow the `ss`-style short forms so the
/// table stays narrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SockState {
    #[serde(rename = "ESTAB")]
    Estab,
    #[serde(rename = "SYN-SENT")]
    SynSent,
    #[serde(rename = "SYN-RECV")]
    SynRecv,
    #[serde(rename = "FIN-WAIT1")]
    FinWait1,
    #[serde(rename = "FIN-WAIT2")]
    FinWait2,
    #[serde(rename = "TIME-WAIT")]
    TimeWait,
    #[serde(rename = "CLOSE")]
    Close,
    #[serde(rename = "CLOSE-WAIT")]
    CloseWait,
    #[serde(rename = "LAST-ACK")]
    LastAck,
    #[serde(rename = "LISTEN")]
    Listen,
    #[serde(rename = "CLOSING")]
    Closing,
    /// UDP "unconnected", the usual state for bound datagram sockets.
    #[serde(rename = "UNCONN")]
    Unconn,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl fmt::Display for SockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SockState::Estab => "ESTAB",
            SockState::SynSent => "SYN-SENT",
            SockState::SynRecv => "SYN-RECV",
            SockState::FinWait1 => "FIN-WAIT1",
            SockState::FinWait2 => "FIN-WAIT2",
            SockState::TimeWait => "TIME-WAIT",
            SockState::Close => "CLOSE",
            SockState::CloseWait => "CLOSE-WAIT",
            SockState::LastAck => "LAST-ACK",
            SockState::Listen => "LISTEN",
            SockState::Closing => "CLOSING",
            SockState::Unconn => "UNCONN",
            SockState::Unknown => "UNKNOWN",
        };
        write!(f, "{}", label)
    }
}

/// Coarse classification of who owns a socket, for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ownership {
    /// The running portly process itself.
    #[serde(rename = "SELF")]
    SelfOwned,
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "SYSTEM")]
    System,
    #[serde(rename = "KERNEL")]
    Kernel,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Ownership::SelfOwned => "SELF",
            Ownership::User => "USER",
            Ownership::System => "SYSTEM",
            Ownership::Kernel => "KERNEL",
            Ownership::Unknown => "UNKNOWN",
        };
        write!(f, "{}", label)
    }
}

/// One resolved socket. Immutable once built; a refresh rebuilds the whole
/// sequence rather than mutating entries in place.
#[derive(Debug, Clone, Serialize)]
pub struct PortEntry {
    pub proto: Proto,
    pub state: SockState,
    pub local_addr: String,
    /// Decimal port, kept as text because it is matched and displayed as text.
    pub local_port: String,
    /// 0 when no process's fd table references the socket inode.
    pub pid: i32,
    #[serde(rename = "process")]
    pub process_name: String,
    #[serde(rename = "user")]
    pub user_name: String,
    pub tag: Ownership,
}

impl PortEntry {
    /// Kernel-owned entry for a socket whose inode resolves to no PID.
    pub fn kernel(proto: Proto, state: SockState, local_addr: String, local_port: String) -> Self {
        PortEntry {
            proto,
            state,
            local_addr,
            local_port,
            pid: 0,
            process_name: KERNEL_PROCESS_NAME.to_string(),
            user_name: KERNEL_USER_NAME.to_string(),
            tag: Ownership::Kernel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        assert_eq!(SockState::Listen.to_string(), "LISTEN");
        assert_eq!(SockState::SynSent.to_string(), "SYN-SENT");
        assert_eq!(SockState::Unconn.to_string(), "UNCONN");
    }

    #[test]
    fn test_kernel_entry_shape() {
        let e = PortEntry::kernel(Proto::Udp, SockState::Unconn, "0.0.0.0".into(), "5353".into());
        assert_eq!(e.pid, 0);
        assert_eq!(e.process_name, KERNEL_PROCESS_NAME);
        assert_eq!(e.tag, Ownership::Kernel);
    }

    #[test]
    fn test_json_field_names() {
        let e = PortEntry {
            proto: Proto::Tcp,
            state: SockState::Listen,
            local_addr: "127.0.0.1".into(),
            local_port: "8080".into(),
            pid: 42,
            process_name: "nginx".into(),
            user_name: "www".into(),
            tag: Ownership::User,
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["proto"], "tcp");
        assert_eq!(json["state"], "LISTEN");
        assert_eq!(json["local_port"], "8080");
        assert_eq!(json["process"], "nginx");
        assert_eq!(json["user"], "www");
        assert_eq!(json["tag"], "USER");
    }
}
