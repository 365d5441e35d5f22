use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");

    let bindings = cbindgen::generate(&crate_dir).expect("cbindgen generation failed");

    let header_path = Path::new("include/shamir_mpc.h");
    if let Err(e) = fs::create_dir_all(header_path.parent().unwrap()) {
        println!("cargo:warning=failed to create include/ directory: {}", e);
    }

    if !bindings.write_to_file(header_path) {
        println!("cargo:warning=failed to write shamir_mpc.h: check permissions or src/lib.rs content");
    } else {
        println!("cargo:info=shamir_mpc.h generated successfully");
    }

    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=build.rs");
}
