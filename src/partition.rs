use crate::types::FlatVideoEntry;

/// Playlist entries split by visibility, extraction order preserved
/// within each group.
#[derive(Debug, Default)]
pub struct Partition {
    pub public: Vec<FlatVideoEntry>,
    pub private: Vec<FlatVideoEntry>,
}

/// Splits a flat listing into public and private videos. Null slots
/// (deleted videos) are dropped; everything else is classified by the
/// private-video sentinel title. The split is stable.
pub fn partition(entries: Vec<Option<FlatVideoEntry>>) -> Partition {
    let mut result = Partition::default();

    for entry in entries.into_iter().flatten() {
        if entry.is_private() {
            result.private.push(entry);
        } else {
            result.public.push(entry);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str) -> Option<FlatVideoEntry> {
        Some(FlatVideoEntry {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            url: None,
        })
    }

    fn ids(entries: &[FlatVideoEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_deref().unwrap()).collect()
    }

    #[test]
    fn it_splits_public_and_private_and_drops_null_slots() {
        let raw = vec![
            entry("a", "T1"),
            entry("b", "[Private video]"),
            None,
            entry("c", "T2"),
        ];

        let split = partition(raw);

        assert_eq!(ids(&split.public), ["a", "c"]);
        assert_eq!(ids(&split.private), ["b"]);
    }

    #[test]
    fn it_conserves_entry_counts() {
        let raw = vec![
            entry("a", "T1"),
            None,
            entry("b", "[Private video]"),
            entry("c", "T2"),
            None,
        ];
        let raw_len = raw.len();
        let nulls = raw.iter().filter(|e| e.is_none()).count();

        let split = partition(raw);

        assert_eq!(split.public.len() + split.private.len() + nulls, raw_len);
    }

    #[test]
    fn it_is_stable_within_each_group() {
        let raw = vec![
            entry("p1", "[Private video]"),
            entry("a", "One"),
            entry("p2", "[Private video]"),
            entry("b", "Two"),
            entry("c", "Three"),
        ];

        let split = partition(raw);

        assert_eq!(ids(&split.public), ["a", "b", "c"]);
        assert_eq!(ids(&split.private), ["p1", "p2"]);
    }

    #[test]
    fn it_treats_a_missing_title_as_public() {
        let raw = vec![Some(FlatVideoEntry {
            id: Some("x".to_string()),
            title: None,
            url: None,
        })];

        let split = partition(raw);

        assert_eq!(split.public.len(), 1);
        assert!(split.private.is_empty());
    }

    #[test]
    fn it_requires_an_exact_sentinel_match() {
        let raw = vec![entry("a", "[private video]"), entry("b", "My [Private video]")];

        let split = partition(raw);

        assert_eq!(split.public.len(), 2);
        assert!(split.private.is_empty());
    }

    #[test]
    fn it_handles_an_empty_listing() {
        let split = partition(vec![]);
        assert!(split.public.is_empty());
        assert!(split.private.is_empty());
    }
}
