use super::*;

fn options(strategy: MatchStrategy, ngram_size: usize) -> QueryOptions {
    QueryOptions {
        strategy,
        ngram_size,
        ..QueryOptions::default()
    }
}

fn id(s: &str) -> EntryId {
    EntryId::try_from(s).unwrap()
}

#[test]
fn substring_query_is_a_single_lowercased_range() {
    let plan = plan("BaN", &options(MatchStrategy::Substring, 0));
    assert_eq!(
        plan,
        QueryPlan::Range {
            token: "ban".to_string(),
            scan_limit: 10 * DUPLICATE_OVERSAMPLE,
        }
    );
}

#[test]
fn case_sensitive_query_keeps_case() {
    let mut opts = options(MatchStrategy::Prefix, 0);
    opts.case_sensitive = true;
    let QueryPlan::Range { token, .. } = plan("Hello", &opts) else {
        panic!("expected range plan");
    };
    assert_eq!(token, "Hello");
}

#[test]
fn ngram_query_up_to_n_is_a_range() {
    assert!(matches!(
        plan("boo", &options(MatchStrategy::NGram, 3)),
        QueryPlan::Range { .. }
    ));
    assert!(matches!(
        plan("bo", &options(MatchStrategy::NGram, 3)),
        QueryPlan::Range { .. }
    ));
}

#[test]
fn ngram_query_longer_than_n_slides() {
    assert_eq!(
        plan("shelf", &options(MatchStrategy::NGram, 3)),
        QueryPlan::SlidingWindow {
            windows: vec!["she".to_string(), "hel".to_string(), "elf".to_string()],
        }
    );
}

#[test]
fn n_or_more_gram_query_shorter_than_n_is_empty() {
    assert_eq!(
        plan("ab", &options(MatchStrategy::NOrMoreGram, 3)),
        QueryPlan::Empty
    );
    assert!(matches!(
        plan("abc", &options(MatchStrategy::NOrMoreGram, 3)),
        QueryPlan::Range { .. }
    ));
}

#[test]
fn empty_query_or_zero_results_is_empty() {
    assert_eq!(plan("", &options(MatchStrategy::Prefix, 0)), QueryPlan::Empty);

    let mut opts = options(MatchStrategy::Prefix, 0);
    opts.max_results = 0;
    assert_eq!(plan("abc", &opts), QueryPlan::Empty);
}

#[test]
fn intersect_keeps_first_set_order() {
    let sets = vec![
        vec![(id("3"), ()), (id("1"), ()), (id("2"), ())],
        vec![(id("1"), ()), (id("3"), ())],
        vec![(id("3"), ()), (id("1"), ()), (id("9"), ())],
    ];
    let ids: Vec<_> = intersect(sets, 10).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, [id("3"), id("1")]);
}

#[test]
fn intersect_applies_cap_after_intersecting() {
    let sets = vec![
        vec![(id("1"), ()), (id("2"), ()), (id("3"), ())],
        vec![(id("3"), ()), (id("2"), ()), (id("1"), ())],
    ];
    assert_eq!(intersect(sets, 2).len(), 2);
}

#[test]
fn intersect_of_nothing_is_empty() {
    assert!(intersect::<()>(Vec::new(), 10).is_empty());
}
