use super::*;
use std::collections::HashSet;

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn prefix_emits_every_prefix_without_position() {
    let tokens = tokenize("Mumbai", MatchStrategy::Prefix, 0, false);
    assert_eq!(texts(&tokens), ["m", "mu", "mum", "mumb", "mumba", "mumbai"]);
    assert!(tokens.iter().all(|t| t.position.is_none()));
}

#[test]
fn ngram_emits_fixed_windows_with_offsets() {
    let tokens = tokenize("Bangalore", MatchStrategy::NGram, 3, false);
    assert_eq!(
        texts(&tokens),
        ["ban", "ang", "nga", "gal", "alo", "lor", "ore"]
    );
    let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, (0..7).map(Some).collect::<Vec<_>>());
}

#[test]
fn ngram_shorter_than_n_emits_nothing() {
    assert!(tokenize("ab", MatchStrategy::NGram, 3, false).is_empty());
}

#[test]
fn ngram_size_zero_uses_default() {
    let tokens = tokenize("abcd", MatchStrategy::NGram, 0, false);
    assert_eq!(texts(&tokens), ["abc", "bcd"]);
}

#[test]
fn n_or_more_gram_emits_all_lengths_from_n() {
    let tokens = tokenize("test", MatchStrategy::NOrMoreGram, 3, false);
    let set: HashSet<_> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.position))
        .collect();
    assert_eq!(
        set,
        HashSet::from([("tes", Some(0)), ("test", Some(0)), ("est", Some(1))])
    );
}

#[test]
fn substring_emits_every_substring() {
    let tokens = tokenize("test", MatchStrategy::Substring, 0, false);
    // n * (n + 1) / 2 substrings, duplicates at different offsets included
    assert_eq!(tokens.len(), 10);
    assert!(tokens.contains(&Token::positional("t".to_string(), 0)));
    assert!(tokens.contains(&Token::positional("t".to_string(), 3)));
    assert!(tokens.contains(&Token::positional("es".to_string(), 1)));
}

#[test]
fn case_insensitive_lowercases_before_tokenizing() {
    let tokens = tokenize("HeLLo", MatchStrategy::Prefix, 0, false);
    assert_eq!(texts(&tokens).last(), Some(&"hello"));
}

#[test]
fn case_sensitive_preserves_case() {
    let tokens = tokenize("HeLLo", MatchStrategy::Prefix, 0, true);
    assert_eq!(texts(&tokens).last(), Some(&"HeLLo"));
}

#[test]
fn multibyte_text_is_split_on_char_boundaries() {
    let tokens = tokenize("Zürich", MatchStrategy::NGram, 2, false);
    assert_eq!(texts(&tokens), ["zü", "ür", "ri", "ic", "ch"]);
}

#[test]
fn tokenization_is_deterministic() {
    let a = tokenize("bookkeeper", MatchStrategy::Substring, 0, false);
    let b = tokenize("bookkeeper", MatchStrategy::Substring, 0, false);
    assert_eq!(a, b);
}

#[test]
fn legacy_tokens_cover_every_strategy() {
    let legacy: HashSet<_> = legacy_tokens("Hello", false).into_iter().collect();
    for strategy in [
        MatchStrategy::Prefix,
        MatchStrategy::NGram,
        MatchStrategy::NOrMoreGram,
        MatchStrategy::Substring,
    ] {
        for token in tokenize("Hello", strategy, 2, false) {
            assert!(legacy.contains(&token), "{strategy}: missing {token:?}");
        }
    }
}

#[test]
fn sliding_windows_overlap() {
    assert_eq!(sliding_windows("shelf", 3), ["she", "hel", "elf"]);
    assert_eq!(sliding_windows("boo", 3), ["boo"]);
    assert!(sliding_windows("bo", 3).is_empty());
}
