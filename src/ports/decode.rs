//! Pure decoders for the hex-encoded address, port, and state fields of the
//! /proc/net socket tables.

use crate::model::{Proto, SockState};

/// Which record shape the kernel table uses for its address column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    V4,
    V6,
}

/// Decode a `local_address` field of the form `ADDR:PORT`, both hex.
///
/// Returns `(address, port)` with the port in decimal. Malformed fields fall
/// back to the raw input as the address with an empty port; callers drop
/// such records rather than emitting blanks.
pub fn decode_addr_port(field: &str, family: Family) -> (String, String) {
    let mut parts = field.split(':');
    let (addr_hex, port_hex) = match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(p), None) => (a, p),
        _ => return (field.to_string(), String::new()),
    };

    let port = match u16::from_str_radix(port_hex, 16) {
        Ok(v) => v.to_string(),
        Err(_) => return (field.to_string(), String::new()),
    };

    let addr = match family {
        Family::V4 => decode_ipv4(addr_hex),
        Family::V6 => decode_ipv6(addr_hex),
    };
    match addr {
        Some(a) => (a, port),
        None => (field.to_string(), port),
    }
}

/// 8 hex chars, 4 bytes stored little-endian: take bytes from the end
/// backward to get dotted-decimal order.
fn decode_ipv4(hex: &str) -> Option<String> {
    if hex.len() != 8 {
        return None;
    }
    let mut bytes = [0u8; 4];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let start = 8 - 2 * (i + 1);
        *byte = u8::from_str_radix(&hex[start..start + 2], 16).ok()?;
    }
    Some(format!("{}.{}.{}.{}", bytes[0], bytes[1], bytes[2], bytes[3]))
}

/// 32 hex chars grouped into 8 quads, each stripped of leading zeros.
///
/// This is the compact-but-not-RFC-5952 form the display format expects
/// (no `::` run collapsing), so it is built by hand rather than going
/// through `std::net::Ipv6Addr`.
fn decode_ipv6(hex: &str) -> Option<String> {
    if hex.len() != 32 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let groups: Vec<&str> = (0..8)
        .map(|i| {
            let g = &hex[i * 4..i * 4 + 4];
            let trimmed = g.trim_start_matches('0');
            if trimmed.is_empty() { "0" } else { trimmed }
        })
        .collect();
    Some(groups.join(":"))
}

/// Map a two-hex-digit state code to its label. Codes outside the table
/// decode to `UNKNOWN`, never an error.
pub fn decode_state(proto: Proto, code: &str) -> SockState {
    let code = code.to_ascii_uppercase();
    match proto {
        Proto::Tcp => match code.as_str() {
            "01" => SockState::Estab,
            "02" => SockState::SynSent,
            "03" => SockState::SynRecv,
            "04" => SockState::FinWait1,
            "05" => SockState::FinWait2,
            "06" => SockState::TimeWait,
            "07" => SockState::Close,
            "08" => SockState::CloseWait,
            "09" => SockState::LastAck,
            "0A" => SockState::Listen,
            "0B" => SockState::Closing,
            _ => SockState::Unknown,
        },
        // UDP sockets report 07 ("close" in TCP terms) while bound and
        // unconnected; anything else is noise.
        Proto::Udp => match code.as_str() {
            "07" => SockState::Unconn,
            _ => SockState::Unknown,
        },
    }
}
