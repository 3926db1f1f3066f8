use log::info;
use rs_num_core::numeral::alphabet::AlphabetPolicy;
use rs_num_core::numeral::bytes::ByteFormatter;
use rs_num_core::numeral::encoder::Encoder;
use rs_num_core::{alpha, bytes, encode, roman, word, word_float};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Verbosity is driven by RUST_LOG (ex. RUST_LOG=trace)
    env_logger::init();

    // Any string can be used as an alphabet, the first character is zero
    // Multi-byte characters (kanji, emoji) count as a single numeral
    println!("encode(4, \"世界\") = {}", encode(4, "世界")?);
    println!("encode(67427, \"!@#$%^&*()\") = {}", encode(67427, "!@#$%^&*()")?);

    // Reuse an encoder when encoding many values, the alphabet is checked once
    let emoji = Encoder::new("😀😁😂🤣😄😅")?;
    info!("emoji encoder uses base {}", emoji.radix());
    for n in [0, 5, 6, 42] {
        println!("emoji({}) = {}", n, emoji.encode(n)?);
    }

    // Invalid alphabets are rejected before encoding
    match encode(10, "abca") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("'abca' is not a valid alphabet: {}", e),
    }
    match encode(10, "a") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("'a' is not a valid alphabet: {}", e),
    }

    // The permissive policy accepts a single symbol, but it can only encode zero
    let single = Encoder::with_policy("a", AlphabetPolicy::Permissive)?;
    println!("single(0) = {}", single.encode(0)?);
    match single.encode(1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("single(1) failed: {}", e),
    }

    // Base 52 letters
    for n in [0, 25, 51, 52] {
        println!("alpha({}) = {}", n, alpha(n)?);
    }

    // Roman numerals, there is no numeral for zero
    println!("roman(1991) = {}", roman(1991)?);
    println!("roman(4859) = {}", roman(4859)?);
    match roman(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("roman(0) failed: {}", e),
    }

    // English words
    println!("word(7232) = {}", word(7232));
    println!("word(-5) = {}", word(-5));
    println!("word_float(3.25, 2) = {}", word_float(3.25, 2));

    // Byte sizes
    for n in [600, 1000, 1536, 70_000_000_000] {
        println!("bytes({}) = {}", n, bytes(n));
    }

    // The unit threshold can be tuned (must be in (0.0, 1.0])
    let mut formatter = ByteFormatter::default();
    formatter.set_threshold(0.5)?;
    println!("bytes(600) with threshold 0.5 = {}", formatter.format(600));
    match formatter.set_threshold(2.0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Threshold 2.0 is invalid: {}", e),
    }

    Ok(())
}
