/// Returns `path` with exactly one trailing `/`, or an empty string when
/// `path` is empty.
pub fn ensure_trailing_slash(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    format!("{}/", path.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_stays_empty() {
        assert_eq!(ensure_trailing_slash(""), "");
    }

    #[test]
    fn appends_missing_separator() {
        assert_eq!(ensure_trailing_slash("v3/static"), "v3/static/");
    }

    #[test]
    fn keeps_single_separator() {
        assert_eq!(ensure_trailing_slash("42/"), "42/");
        assert_eq!(ensure_trailing_slash("/"), "/");
    }

    #[test]
    fn collapses_trailing_separators() {
        assert_eq!(ensure_trailing_slash("42//"), "42/");
        assert_eq!(ensure_trailing_slash("///"), "/");
    }

    proptest! {
        #[test]
        fn idempotent(path in "[a-z0-9/.]{0,16}") {
            let once = ensure_trailing_slash(&path);
            prop_assert_eq!(ensure_trailing_slash(&once), once.clone());
            prop_assert!(!once.ends_with("//"));
            prop_assert_eq!(once.is_empty(), path.is_empty());
        }
    }
}
