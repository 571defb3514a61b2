#![no_main]

use libfuzzer_sys::fuzz_target;
use strbuf::{Algorithm, find_all, find_first};

fuzz_target!(|data: Vec<u8>| {
    if data.is_empty() {
        return;
    }

    // First byte picks the pattern length, the rest is the haystack
    let pat_len = (data[0] as usize % 8) + 1;
    let hay = &data[1..];

    for start in [0, hay.len() / 2, hay.len().saturating_sub(pat_len)] {
        let pattern = &hay[start.min(hay.len())..(start + pat_len).min(hay.len())];

        let kmp = find_all(hay, pattern, Algorithm::KnuthMorrisPratt).unwrap();
        let bmh = find_all(hay, pattern, Algorithm::BoyerMooreHorspool).unwrap();

        // Verify: both algorithms agree
        assert_eq!(kmp, bmh);

        // Verify: ascending, real matches
        for pair in kmp.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for &o in &kmp {
            assert_eq!(&hay[o..o + pattern.len()], pattern);
        }

        // Verify: no occurrence missed
        if !pattern.is_empty() && pattern.len() <= hay.len() {
            let expected = hay.windows(pattern.len()).filter(|w| *w == pattern).count();
            assert_eq!(kmp.len(), expected);
        }

        for algorithm in Algorithm::ALL {
            assert_eq!(find_first(hay, pattern, algorithm).unwrap(), kmp.first().copied());
        }
    }
});
