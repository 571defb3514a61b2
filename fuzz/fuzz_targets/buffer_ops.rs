#![no_main]

use libfuzzer_sys::fuzz_target;
use strbuf::StrBuf;

fuzz_target!(|input: (Vec<u8>, Vec<u8>, Vec<u8>)| {
    let (content, old, new) = input;
    let mut buf = StrBuf::from(content.as_slice());

    buf.replace(&old, &new).unwrap();
    assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));

    // Verify: split/join round-trips
    if !new.is_empty() {
        let fields: Vec<&[u8]> = buf.split(&new).unwrap().collect();
        assert_eq!(fields.join(&new[..]), buf.as_bytes());
    }

    // Verify: trim is a fixed point
    let before = buf.len();
    buf.trim(&old);
    assert!(buf.len() <= before);
    let once = buf.clone();
    buf.trim(&old);
    assert_eq!(buf, once);

    buf.reverse();
    buf.to_upper();
    assert_eq!(buf.as_bytes_with_nul().len(), buf.len() + 1);
});
