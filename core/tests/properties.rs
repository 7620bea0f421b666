use lexis_core::engine::KeyRange;
use lexis_core::memory::MemoryStore;
use lexis_core::{
    EntryId, IndexOptions, MatchStrategy, Namespace, OrderedStore, Provider, QueryOptions,
    RangeProvider,
};
use proptest::prelude::*;

fn namespace() -> Namespace {
    Namespace::try_from("props").unwrap()
}

fn entry_id() -> EntryId {
    EntryId::try_from("subject").unwrap()
}

fn provider_with(text: &str, strategy: MatchStrategy) -> RangeProvider<MemoryStore> {
    let provider = RangeProvider::new(MemoryStore::new());
    provider
        .index(
            &namespace(),
            &entry_id(),
            text,
            "display",
            &IndexOptions {
                strategy,
                ..IndexOptions::default()
            },
        )
        .unwrap();
    provider
}

fn matches(provider: &RangeProvider<MemoryStore>, strategy: MatchStrategy, query: &str) -> bool {
    let options = QueryOptions {
        strategy,
        ..QueryOptions::default()
    };
    provider
        .query(&namespace(), query, &options)
        .unwrap()
        .iter()
        .any(|r| r.id == entry_id())
}

/// `(text, start, end)` with `start < end <= len` in chars.
fn text_and_span() -> impl Strategy<Value = (String, usize, usize)> {
    "[a-zA-Z0-9 :é]{1,12}".prop_flat_map(|text| {
        let len = text.chars().count();
        (Just(text), 0..len).prop_flat_map(move |(text, start)| {
            (Just(text), Just(start), (start + 1)..=len)
        })
    })
}

fn span(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

proptest! {
    #[test]
    fn substring_index_finds_every_substring((text, start, end) in text_and_span()) {
        let provider = provider_with(&text, MatchStrategy::Substring);
        let query = span(&text.to_lowercase(), start, end);
        prop_assert!(matches(&provider, MatchStrategy::Substring, &query));
    }

    #[test]
    fn prefix_index_rejects_non_prefixes((text, start, end) in text_and_span()) {
        let normalized = text.to_lowercase();
        let query = span(&normalized, start, end);
        prop_assume!(!normalized.starts_with(&query));

        let provider = provider_with(&text, MatchStrategy::Prefix);
        prop_assert!(!matches(&provider, MatchStrategy::Prefix, &query));
    }

    #[test]
    fn delete_leaves_no_residual_keys(
        (text, start, end) in text_and_span(),
        strategy in prop_oneof![
            Just(MatchStrategy::Prefix),
            Just(MatchStrategy::NGram),
            Just(MatchStrategy::NOrMoreGram),
            Just(MatchStrategy::Substring),
        ],
    ) {
        let provider = provider_with(&text, strategy);
        provider.delete(&namespace(), &entry_id()).unwrap();

        let query = span(&text.to_lowercase(), start, end);
        prop_assert!(!matches(&provider, strategy, &query));

        let residual = provider
            .store()
            .scan(&namespace(), &KeyRange::all(), None)
            .unwrap();
        prop_assert!(residual.is_empty());
    }
}
