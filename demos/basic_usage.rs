// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the INI configuration crate.
//!
//! This example demonstrates:
//! - Loading an INI file
//! - Reading strings, both owned and into a fixed buffer
//! - Reading every integer width, floats and a socket address
//! - Defaults for missing keys, and keys with spaces, symbols and CJK text
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_usage -- demos/test.ini
//! ```

use hexini::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/test.ini".to_string());
    let config = hexini::load(&path)?;

    println!("=== INI Configuration: Basic Usage ===\n");

    println!("{}", config.read_string(Some("main"), "type", "test").value());

    let mut value = [0u8; 100];
    let len = config
        .read_string_bounded(Some("main"), "len", &mut value, None)
        .into_value();
    println!("{}", String::from_utf8_lossy(&value[..len]));

    let s = Some("int");
    println!(
        "int: {}, unsigned: {}",
        config.read_int(s, "int", 0).value(),
        config.read_unsigned(s, "unsigned", 0).value()
    );
    println!(
        "int8: {}, uint8: {}",
        config.read_i8(s, "int8", 0).value(),
        config.read_u8(s, "uint8", 0).value()
    );
    println!(
        "int16: {}, uint16: {}",
        config.read_i16(s, "int16", 0).value(),
        config.read_u16(s, "uint16", 0).value()
    );
    println!(
        "int32: {}, uint32: {}",
        config.read_i32(s, "int32", 0).value(),
        config.read_u32(s, "uint32", 0).value()
    );
    println!(
        "int64: {}, uint64: {}",
        config.read_i64(s, "int64", 0).value(),
        config.read_u64(s, "uint64", 0).value()
    );

    println!(
        "float: {:.6}, double: {:.6}",
        config.read_float(Some("float"), "float", 0.0).value(),
        config.read_double(Some("float"), "double", 0.0).value()
    );

    let addr = config.read_ipv4_socket_addr(Some("addr"), "ipv4", "127.0.0.1:0");
    println!("{}", addr.value());

    let proc_name = config.read_string(Some("global"), "proc_name", "test.ini");
    println!("proc_name: {}", proc_name.value());

    let phone_num = config.read_string(Some("damon"), "phone num", "123456789");
    println!("phone num: {}", phone_num.value());

    println!(
        "{}",
        config.read_string(Some("global"), "$%^#@!", "shen zhen").value()
    );
    println!("{}", config.read_string(None, "名字", "").value());

    let missing = config.read_string(Some("main"), "missing", "fallback");
    println!(
        "missing: {} ({:?})",
        missing.value(),
        missing.outcome()
    );

    Ok(())
}
