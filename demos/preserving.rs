//! Editing a document while keeping its comments and layout.
//!
//! Run with: cargo run --example preserving

use sml::{from_str_preserving, to_string};
use std::error::Error;

const CONFIG: &str = "\
# Application settings
Config
    Name   MyApp      # shown in the title bar

    # Network
    Network
        Port 8080
    End
End
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut document = from_str_preserving(CONFIG)?;
    assert_eq!(to_string(&document), CONFIG);
    println!("Unchanged document is reproduced exactly.\n");

    if let Some(network) = document.root_mut().element_mut("network") {
        network.add_string("Timeout", 30);
    }
    document.set_default_indentation("    ")?;

    println!("After adding an attribute:\n{}", to_string(&document));
    Ok(())
}
