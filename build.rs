use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only run the library tests
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    println!("cargo:rustc-link-arg=-mmcu=atmega328p");

    if env::var("CARGO_FEATURE_DEBUG").is_ok() {
        println!("cargo:warning=Building console image: DMX output disabled on USART0");
    }
}
