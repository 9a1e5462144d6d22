/// First address of an `X-Forwarded-For` value, i.e. the original client.
///
/// Returns `None` for an empty or blank header.
pub fn first_forwarded_for(header: &str) -> Option<&str> {
    header
        .split(',')
        .next()
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_forwarded_for() {
        assert_eq!(
            first_forwarded_for("203.0.113.7, 10.0.0.2, 10.0.0.3"),
            Some("203.0.113.7")
        );
        assert_eq!(first_forwarded_for(" 198.51.100.1 "), Some("198.51.100.1"));
        assert_eq!(first_forwarded_for(""), None);
        assert_eq!(first_forwarded_for(" , 10.0.0.2"), None);
    }
}
