use crate::error::Error;
use crate::hash::Sha1Hex;
use crate::range::RangeQuery;

/// Outcome of a breach check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pwnage {
    /// The password's hash appeared in the corpus; `count` is the number of
    /// times it has been observed in known breach data.
    Found { count: u64 },
    /// No record for the password's hash in the queried bucket.
    NotFound,
}

/// Checks passwords against a breach corpus through a [`RangeQuery`] backend.
pub struct BreachChecker<Q> {
    range: Q,
}

impl<Q: RangeQuery> BreachChecker<Q> {
    pub fn new(range: Q) -> Self {
        Self { range }
    }

    /// Checks whether `password` appears in the breach corpus.
    ///
    /// The password is hashed locally; only the first 5 hex characters of the
    /// digest are handed to the range backend, and the remaining 35 are
    /// matched against the returned candidates here. Backend failures
    /// propagate unmodified.
    pub async fn check_password(&self, password: &str) -> Result<Pwnage, Error> {
        let hash = Sha1Hex::of_password(password);
        let candidates = self.range.fetch_candidates(hash.prefix()).await?;
        match_candidates(&candidates, hash.suffix())
    }
}

/// Scans candidate records for an exact, case-insensitive match on the
/// suffix field (the text before the first `:`). Whole-line substring
/// containment would admit a false positive whenever a digest happens to
/// appear inside another record's text, so only full-field equality counts.
fn match_candidates(candidates: &[String], suffix: &str) -> Result<Pwnage, Error> {
    for line in candidates {
        let (field, count) = parse_record(line)?;
        if field.eq_ignore_ascii_case(suffix) {
            // Buckets hold at most one record per full hash, so the first
            // exact match is the answer.
            return Ok(Pwnage::Found { count });
        }
    }

    Ok(Pwnage::NotFound)
}

/// Splits a `suffix:count` record. A missing separator or a count that does
/// not parse as a decimal integer is a data-integrity failure, never a miss.
fn parse_record(line: &str) -> Result<(&str, u64), Error> {
    let (field, count) = line
        .split_once(':')
        .ok_or_else(|| Error::MalformedRecord { line: line.to_string() })?;

    let count = count
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::MalformedRecord { line: line.to_string() })?;

    Ok((field, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    // password123 -> cbfda / c6008f9cab4083784cbd1874f76618d2a97
    const SUFFIX: &str = "c6008f9cab4083784cbd1874f76618d2a97";

    struct FakeRange {
        lines: Vec<String>,
    }

    impl FakeRange {
        fn new(lines: &[&str]) -> Self {
            Self { lines: lines.iter().map(|l| l.to_string()).collect() }
        }
    }

    impl RangeQuery for FakeRange {
        async fn fetch_candidates(&self, _prefix: &str) -> Result<Vec<String>, Error> {
            Ok(self.lines.clone())
        }
    }

    struct FailingRange;

    impl RangeQuery for FailingRange {
        async fn fetch_candidates(&self, prefix: &str) -> Result<Vec<String>, Error> {
            Err(Error::RemoteStatus { prefix: prefix.to_string(), status: 503 })
        }
    }

    #[tokio::test]
    async fn test_found_with_count() {
        // The live API reports suffixes in uppercase.
        let checker = BreachChecker::new(FakeRange::new(&[
            "C5AE97D70805BD4D8BBF22D8302A34BE543:3",
            &format!("{}:42", SUFFIX.to_uppercase()),
            "C6D1C8B4F2D5B9D33D73D74C19ABBA870A9:1",
        ]));

        let result = checker.check_password("password123").await.unwrap();
        assert_eq!(result, Pwnage::Found { count: 42 });
    }

    #[tokio::test]
    async fn test_not_found() {
        let checker = BreachChecker::new(FakeRange::new(&[
            "C5AE97D70805BD4D8BBF22D8302A34BE543:3",
            "C6D1C8B4F2D5B9D33D73D74C19ABBA870A9:1",
        ]));

        let result = checker.check_password("password123").await.unwrap();
        assert_eq!(result, Pwnage::NotFound);
    }

    #[tokio::test]
    async fn test_empty_bucket() {
        let checker = BreachChecker::new(FakeRange::new(&[]));
        let result = checker.check_password("password123").await.unwrap();
        assert_eq!(result, Pwnage::NotFound);
    }

    #[tokio::test]
    async fn test_containment_is_not_a_match() {
        // The target suffix appears inside a longer field without being an
        // exact field match.
        let checker = BreachChecker::new(FakeRange::new(&[&format!(
            "0{}:7",
            SUFFIX.to_uppercase()
        )]));

        let result = checker.check_password("password123").await.unwrap();
        assert_eq!(result, Pwnage::NotFound);
    }

    #[test]
    fn test_target_inside_count_field_is_not_a_match() {
        // Exact field equality: a target appearing inside another record's
        // count text must not register as a match.
        let lines = vec![format!("{}:1230", "F".repeat(35))];
        let result = match_candidates(&lines, "123").unwrap();
        assert_eq!(result, Pwnage::NotFound);
    }

    #[tokio::test]
    async fn test_backend_error_propagates_unmodified() {
        let checker = BreachChecker::new(FailingRange);

        let err = checker.check_password("password123").await.unwrap_err();
        assert!(matches!(err, Error::RemoteStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_malformed_record_missing_separator() {
        let checker = BreachChecker::new(FakeRange::new(&[
            "C5AE97D70805BD4D8BBF22D8302A34BE543",
        ]));

        let err = checker.check_password("password123").await.unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
    }

    #[tokio::test]
    async fn test_malformed_record_bad_count() {
        let checker = BreachChecker::new(FakeRange::new(&[
            "C5AE97D70805BD4D8BBF22D8302A34BE543:many",
        ]));

        let err = checker.check_password("password123").await.unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
    }

    #[test]
    fn test_parse_record_trims_count() {
        // Lines split on bare \n from a CRLF body keep a trailing \r.
        let (field, count) = parse_record("C5AE97D70805BD4D8BBF22D8302A34BE543:3\r").unwrap();
        assert_eq!(field, "C5AE97D70805BD4D8BBF22D8302A34BE543");
        assert_eq!(count, 3);
    }
}
