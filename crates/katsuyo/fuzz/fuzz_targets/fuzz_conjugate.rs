//! Fuzz target for classification and conjugation.
//!
//! Any (word, tag) pair must classify without panicking, and conjugating
//! under the resulting class must either fail with an error or yield the
//! class's full category set.

#![no_main]

use arbitrary::Arbitrary;
use katsuyo::{classify, conjugate, ConjugationClass};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    word: String,
    tag: String,
    forced_class: Option<u8>,
}

fuzz_target!(|input: Input| {
    if input.word.len() > 1_000 || input.tag.len() > 1_000 {
        return;
    }

    let class = match input.forced_class {
        Some(n) => ConjugationClass::ALL[n as usize % ConjugationClass::ALL.len()],
        None => classify(&input.word, &input.tag),
    };

    if let Ok(paradigm) = conjugate(&input.word, class) {
        assert_eq!(paradigm.len(), class.paradigm_size());
    }
});
