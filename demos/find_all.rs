//! Prints every match of a pattern in a haystack.
//!
//! Run with:
//!     cargo run --example find_all -- Mississippi iss
//!     cargo run --example find_all -- Mississippi iss bmh
//!
//! Set `RUST_LOG=trace` to see the search engine's statistics.

use strbuf::{Algorithm, StrBuf, find_all};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let haystack = args.next().unwrap_or_else(|| "Mississippi".to_string());
    let pattern = args.next().unwrap_or_else(|| "iss".to_string());
    let algorithm: Algorithm = match args.next() {
        Some(name) => name.parse()?,
        None => Algorithm::default(),
    };

    let offsets = find_all(haystack.as_bytes(), pattern.as_bytes(), algorithm)?;
    println!("algorithm: {}", algorithm);
    println!("find_all({:?}, {:?}) = {:?}", haystack, pattern, offsets);

    let buf = StrBuf::from(haystack.as_str());
    println!("contains: {}", buf.contains(pattern.as_bytes())?);
    println!("count:    {}", buf.count(pattern.as_bytes())?);

    Ok(())
}
