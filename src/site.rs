use chrono::{DateTime, Datelike};

pub const OWNER_FIRST_NAME: &str = "Sadek";
pub const OWNER_LAST_NAME: &str = "Elzakzouk";
pub const OWNER_INITIALS: &str = "SE";
pub const ROLES: &[&str] = &["IT Support Specialist", "Software Engineer in Training"];
pub const LOCATION: &str = "Istanbul, Turkey";
pub const PORTRAIT: &str =
    "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=400";

/// RFC 3339 timestamp captured by build.rs
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn owner_name() -> String {
    format!("{OWNER_FIRST_NAME} {OWNER_LAST_NAME}")
}

pub fn year_of(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|d| d.year())
}

/// Year shown in the footer copyright line.
pub fn build_year() -> i32 {
    year_of(BUILD_TIME).unwrap_or(2025)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2025-03-14T09:26:53+00:00"), Some(2025));
        assert_eq!(year_of("2031-12-31T23:59:59.123456789Z"), Some(2031));
        assert_eq!(year_of("not a date"), None);
    }

    #[test]
    fn test_build_year_from_stamp() {
        assert_eq!(Some(build_year()), year_of(BUILD_TIME));
    }

    #[test]
    fn test_owner_name() {
        assert_eq!(owner_name(), "Sadek Elzakzouk");
        assert_eq!(
            OWNER_INITIALS,
            format!(
                "{}{}",
                &OWNER_FIRST_NAME[..1],
                &OWNER_LAST_NAME[..1]
            )
        );
    }
}
