//! Choosing parse and serialization options.
//!
//! Run with: cargo run --example custom_options

use sml::{
    from_str_with_options, to_string_with_options, Error, ParseOptions, SerializeOptions,
};

const TEXT: &str = "Root\n  # comment\n  Value 1   # trailing\nEnd";

fn main() -> Result<(), Error> {
    let preserving = ParseOptions::preserving();
    let document = from_str_with_options(TEXT, preserving)?;

    println!("Preserving:");
    println!("{}\n", to_string_with_options(&document, &SerializeOptions::new()));

    println!("Canonical:");
    let canonical = SerializeOptions::new().with_preserve_formatting(false);
    println!("{}\n", to_string_with_options(&document, &canonical));

    println!("Minified:");
    println!("{}\n", to_string_with_options(&document, &SerializeOptions::minified()));

    // Limit nesting for untrusted input
    let deep = "A\n".repeat(50) + &"End\n".repeat(50);
    let strict = ParseOptions::new().with_max_depth(10);
    match from_str_with_options(&deep, strict) {
        Ok(_) => println!("parsed"),
        Err(err) => println!("Rejected: {}", err),
    }

    Ok(())
}
