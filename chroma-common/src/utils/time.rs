use chrono::{DateTime, Utc};

/// Returns the current UTC time.
///
/// Used to stamp vote records when a session submits them.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_monotonic() {
        let t1 = now();
        let t2 = now();
        // Pode ser igual, o clock nem sempre avança entre chamadas
        assert!(t2 >= t1, "Second timestamp should be greater than or equal to the first");
    }
}
