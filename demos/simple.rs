//! Basic SML parsing and serialization.
//!
//! Run with: cargo run --example simple

use sml::{from_str, to_string, to_string_minified};
use std::error::Error;

const CONTACTS: &str = "\
Contacts
  Person
    Name \"Alice Johnson\"
    Email alice@example.com
  End
  Person
    Name \"Bob Smith\"
    Email bob@example.com
    Phone -
  End
End";

fn main() -> Result<(), Box<dyn Error>> {
    let document = from_str(CONTACTS)?;

    for person in document.root().elements("person") {
        let name = person.string("name").unwrap_or("?");
        let phone = person.string("phone").unwrap_or("(none)");
        println!("{} <{}> phone: {}", name, person.string("email").unwrap_or("?"), phone);
    }

    println!("\nSML output:\n{}\n", to_string(&document));
    println!("Minified:\n{}\n", to_string_minified(&document));

    let back = from_str(&to_string_minified(&document))?;
    assert_eq!(back.root(), document.root());
    println!("✓ Round-trip successful");

    Ok(())
}
