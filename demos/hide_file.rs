// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Example: hide a file in a cover image, or reveal it again.
use std::fs;
use std::path::Path;

use hhimage_core::{hide_file, reveal_file, revealed_file_name, PayloadFile, StegoConfig};

fn config(passphrase: Option<&String>) -> StegoConfig {
    let passphrase = passphrase.map(String::as_str).unwrap_or_default();
    StegoConfig::protected()
        .with_passphrase_or_fallback(passphrase)
        .unwrap_or_else(|e| {
            eprintln!("Invalid passphrase: {e}");
            std::process::exit(1);
        })
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: hide_file <cover-image> <file> [passphrase]");
        eprintln!("       hide_file --reveal <stego.png> [passphrase]");
        std::process::exit(1);
    }

    if args[1] == "--reveal" {
        let stego = fs::read(&args[2]).expect("Could not read stego image");
        match reveal_file(&stego, &config(args.get(3))) {
            Ok(file) => {
                let name = revealed_file_name(&file);
                fs::write(&name, &file.content).expect("Could not write revealed file");
                println!("Revealed {} ({} bytes)", name, file.size);
            }
            Err(e) => eprintln!("Reveal failed: {e}"),
        }
    } else {
        let cover = fs::read(&args[1]).expect("Could not read cover image");
        let payload = PayloadFile::from_path(&args[2]).expect("Could not read payload file");
        let stego = hide_file(&cover, &payload, &config(args.get(3))).expect("Hide failed");

        let stem = Path::new(&args[1])
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let out_path = format!("{stem}_hidden.png");
        fs::write(&out_path, &stego).expect("Could not write output");
        println!("Stego image written to: {}", out_path);
        println!("Cover: {} bytes, Stego: {} bytes", cover.len(), stego.len());
    }
}
