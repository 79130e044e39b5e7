//! Building element trees with the sml! macro.
//!
//! Run with: cargo run --example macro

use sml::{sml, Document};

fn main() {
    let root = sml!("Server" {
        "Host" => "localhost";
        "Port" => 8080;
        "Paths" => "/api", "/static", None::<&str>;
        "Tls" {
            "Enabled" => true;
            "Certificate" => "certs/server crt.pem";
        }
    });

    let mut document = Document::new(root);
    println!("Default:\n{}\n", document);

    document.set_end_keyword(Some("Ende"));
    println!("Custom end keyword:\n{}\n", document);

    println!("Minified:\n{}", document.to_string_minified());
}
