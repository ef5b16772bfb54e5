use uuid::Uuid;

/// Generate a time-ordered identifier for a new row.
///
/// UUID v7 embeds a millisecond timestamp in the high bits and random data in
/// the low bits, so identifiers are unique and sort in rough creation order.
/// Never blocks and has no error path.
pub fn generate() -> Uuid {
    Uuid::now_v7()
}

/// Extract the embedded millisecond timestamp from a generated identifier.
pub fn timestamp_ms(id: Uuid) -> Option<i64> {
    id.get_timestamp().map(|ts| {
        let (secs, nanos) = ts.to_unix();
        secs as i64 * 1_000 + i64::from(nanos) / 1_000_000
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_unique_ids() {
        let mut ids: Vec<Uuid> = (0..1000).map(|_| generate()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn ids_are_time_ordered() {
        let first = generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = generate();
        assert!(first < second);
    }

    #[test]
    fn embeds_millisecond_timestamp() {
        let before = time::OffsetDateTime::now_utc().unix_timestamp() * 1_000;
        let id = generate();
        let after = time::OffsetDateTime::now_utc().unix_timestamp() * 1_000 + 1_000;

        let ms = timestamp_ms(id).expect("v7 id carries a timestamp");
        assert!(ms >= before && ms <= after);
    }
}
