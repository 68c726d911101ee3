use crate::model::Ownership;

/// Conventional first non-system uid on most distributions. Kept fixed
/// rather than probing login.defs.
pub const SYSTEM_UID_THRESHOLD: u32 = 1000;

/// Tag an entry by owner. `uid` is the raw uid text of the owning process
/// (empty when unreadable), `current_uid` the invoking user's uid text.
///
/// SELF wins over everything, including root-owned portly instances.
pub fn classify(uid: &str, current_uid: &str, pid: i32) -> Ownership {
    if pid == std::process::id() as i32 {
        return Ownership::SelfOwned;
    }
    if uid.is_empty() || pid == 0 {
        return Ownership::System;
    }
    if uid == "0" {
        return Ownership::System;
    }
    if !current_uid.is_empty() && uid == current_uid {
        return Ownership::User;
    }
    if let Ok(v) = uid.parse::<u32>() {
        if v < SYSTEM_UID_THRESHOLD {
            return Ownership::System;
        }
    }
    Ownership::User
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_system() {
        assert_eq!(classify("0", "1000", 42), Ownership::System);
        assert_eq!(classify("0", "0", 42), Ownership::System);
    }

    #[test]
    fn test_current_user_matches() {
        assert_eq!(classify("1000", "1000", 42), Ownership::User);
    }

    #[test]
    fn test_self_wins_over_uid_rules() {
        let me = std::process::id() as i32;
        assert_eq!(classify("0", "1000", me), Ownership::SelfOwned);
        assert_eq!(classify("", "1000", me), Ownership::SelfOwned);
    }

    #[test]
    fn test_empty_uid_or_zero_pid() {
        assert_eq!(classify("", "1000", 42), Ownership::System);
        assert_eq!(classify("1000", "1000", 0), Ownership::System);
    }

    #[test]
    fn test_low_uid_is_system() {
        assert_eq!(classify("33", "1000", 42), Ownership::System);
        assert_eq!(classify("999", "1000", 42), Ownership::System);
    }

    #[test]
    fn test_other_regular_user() {
        assert_eq!(classify("1001", "1000", 42), Ownership::User);
    }

    #[test]
    fn test_unparsable_uid_defaults_to_user() {
        assert_eq!(classify("nobody", "1000", 42), Ownership::User);
    }
}
