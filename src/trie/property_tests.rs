//! Property-based tests for the trie's add/contains/delete contract.

use std::collections::HashSet;

use itertools::Itertools;
use proptest::prelude::*;

use super::Trie;

const TERMINATOR: char = '*';

// Small alphabet so that generated words share prefixes often.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{1,6}").unwrap()
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..24)
}

// Words with at least one terminator somewhere.
fn invalid_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,5}\\*[abc*]{0,5}").unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    AddInvalid(String),
    Delete(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => word_strategy().prop_map(Op::Add),
        2 => invalid_word_strategy().prop_map(Op::AddInvalid),
        2 => word_strategy().prop_map(Op::Delete),
    ]
}

fn probe_words() -> Vec<String> {
    (1..=4)
        .flat_map(|len| {
            std::iter::repeat("abc".chars())
                .take(len)
                .multi_cartesian_product()
                .map(|chars| chars.into_iter().collect::<String>())
        })
        .collect()
}

fn snapshot(trie: &Trie) -> Vec<bool> {
    probe_words().iter().map(|w| trie.contains(w)).collect()
}

proptest! {
    // Property: a word that was added is contained
    #[test]
    fn prop_add_then_contains(words in words_strategy()) {
        let mut trie = Trie::new(TERMINATOR);
        for word in &words {
            trie.add(word);
            prop_assert!(trie.contains(word));
        }
        for word in &words {
            prop_assert!(trie.contains(word));
        }
    }

    // Property: adding the same word twice yields true then false and changes nothing
    #[test]
    fn prop_second_add_is_rejected(words in words_strategy(), word in word_strategy()) {
        let mut trie = Trie::new(TERMINATOR);
        trie.extend(&words);
        let expected = !words.contains(&word);
        prop_assert_eq!(trie.add(&word), expected);

        let before = snapshot(&trie);
        let nodes = trie.node_count();
        prop_assert!(!trie.add(&word));
        prop_assert_eq!(snapshot(&trie), before);
        prop_assert_eq!(trie.node_count(), nodes);
    }

    // Property: words holding the terminator are rejected without any change
    #[test]
    fn prop_terminator_rejection_is_atomic(words in words_strategy(), bad in invalid_word_strategy()) {
        let mut trie = Trie::new(TERMINATOR);
        trie.extend(&words);
        let before = snapshot(&trie);
        let nodes = trie.node_count();

        prop_assert!(!trie.add(&bad));
        prop_assert_eq!(snapshot(&trie), before);
        prop_assert_eq!(trie.node_count(), nodes);
        prop_assert!(trie.is_clean());
        for word in &words {
            prop_assert!(trie.contains(word));
        }
    }

    // Property: no unclean node survives any mix of operations
    #[test]
    fn prop_always_clean(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut trie = Trie::new(TERMINATOR);
        for op in ops {
            match op {
                Op::Add(word) => { trie.add(&word); }
                Op::AddInvalid(word) => { prop_assert!(!trie.add(&word)); }
                Op::Delete(word) => trie.delete(&word),
            }
            prop_assert!(trie.is_clean());
            prop_assert!(trie.contains(""));
        }
    }

    // Property: the trie agrees with a set model under any mix of operations
    #[test]
    fn prop_matches_set_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut trie = Trie::new(TERMINATOR);
        let mut model = HashSet::new();
        for op in ops {
            match op {
                Op::Add(word) => {
                    let expected = !model.contains(&word);
                    prop_assert_eq!(trie.add(&word), expected);
                    model.insert(word);
                }
                Op::AddInvalid(word) => { prop_assert!(!trie.add(&word)); }
                Op::Delete(word) => {
                    let expected = model.remove(&word);
                    prop_assert_eq!(trie.remove(&word), expected);
                }
            }
        }
        for probe in probe_words() {
            prop_assert_eq!(trie.contains(&probe), model.contains(&probe), "{}", probe);
        }
    }

    // Property: add, delete, contains yields false
    #[test]
    fn prop_delete_then_contains(words in words_strategy(), word in word_strategy()) {
        let mut trie = Trie::new(TERMINATOR);
        trie.extend(&words);
        trie.add(&word);
        trie.delete(&word);
        prop_assert!(!trie.contains(&word));
    }

    // Property: deleting a word that was never added changes nothing
    #[test]
    fn prop_delete_absent_is_noop(words in words_strategy(), absent in word_strategy()) {
        prop_assume!(!words.contains(&absent));
        let mut trie = Trie::new(TERMINATOR);
        trie.extend(&words);
        let before = snapshot(&trie);
        trie.delete(&absent);
        prop_assert_eq!(snapshot(&trie), before);
    }

    // Property: pruning never changes which words are contained
    #[test]
    fn prop_prune_preserves_contents(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut trie = Trie::new(TERMINATOR);
        for op in ops {
            match op {
                Op::Add(word) | Op::AddInvalid(word) => { trie.add(&word); }
                Op::Delete(word) => trie.delete(&word),
            }
        }
        let before = snapshot(&trie);
        trie.prune();
        prop_assert_eq!(snapshot(&trie), before);
        prop_assert_eq!(trie.prune(), 0);
        prop_assert!(trie.is_clean());
    }
}

#[test]
fn insertion_order_does_not_matter() {
    const WORDS: [&str; 6] = ["car", "cart", "cat", "ca", "dog", "do"];
    // Every prefix of every word, plus a few that were never added.
    let probes: Vec<String> = WORDS
        .iter()
        .flat_map(|w| (1..=w.chars().count()).map(move |n| w.chars().take(n).collect()))
        .chain(["cats", "dogs", "x"].map(String::from))
        .collect();
    let expected = {
        let mut trie = Trie::new(TERMINATOR);
        trie.extend(WORDS);
        probes.iter().map(|w| trie.contains(w)).collect::<Vec<_>>()
    };
    // Go through all possible permutations and see that each yields the same contents.
    for wordlist in WORDS.iter().permutations(WORDS.len()) {
        let mut trie = Trie::new(TERMINATOR);
        assert!(!trie.add("te*st"));
        for &word in &wordlist {
            assert!(trie.add(word), "{}", word);
        }
        let actual = probes.iter().map(|w| trie.contains(w)).collect::<Vec<_>>();
        assert_eq!(actual, expected, "{:?}", wordlist);
        assert!(trie.is_clean());
    }
    assert_eq!(
        expected.iter().filter(|&&contained| contained).count(),
        probes.iter().filter(|p| WORDS.contains(&p.as_str())).count()
    );
}
