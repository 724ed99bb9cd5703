use std::collections::HashSet;

/// Normalize a raw cluster-admin list.
///
/// Entries are trimmed, blank entries dropped and exact duplicates removed,
/// keeping first-seen order. An empty result means no admins were configured.
pub fn sanitize_cluster_admins<S: AsRef<str>>(admins: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    admins
        .iter()
        .map(|a| a.as_ref().trim())
        .filter(|a| !a.is_empty())
        .filter(|a| seen.insert(*a))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &[&str], expected: &[&str]) {
        assert_eq!(sanitize_cluster_admins(input), expected, "input: {input:?}");
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        check(&[], &[]);
        check(&["", ""], &[]);
        check(&["  ", " "], &[]);
    }

    #[test]
    fn valid_admins_pass_through() {
        check(
            &["user1@example.com", "user2@example.com"],
            &["user1@example.com", "user2@example.com"],
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        check(
            &["  user1@example.com", "user2@example.com "],
            &["user1@example.com", "user2@example.com"],
        );
        check(&["\tuser1@example.com\n"], &["user1@example.com"]);
    }

    #[test]
    fn mixed_blank_and_valid() {
        check(
            &["", "user1@example.com", "   ", "user2@example.com  "],
            &["user1@example.com", "user2@example.com"],
        );
    }

    #[test]
    fn duplicates_collapse_after_trimming() {
        check(&["", "  a@x.com  ", "a@x.com", " "], &["a@x.com"]);
        check(
            &["b@x.com", "a@x.com", "b@x.com"],
            &["b@x.com", "a@x.com"],
        );
    }

    #[test]
    fn owned_strings_are_accepted() {
        let owned = vec![" admin@x.com ".to_string()];
        assert_eq!(sanitize_cluster_admins(&owned), vec!["admin@x.com"]);
    }
}
