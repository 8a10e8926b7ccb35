fn main() {
    // NSRunningApplication and NSWorkspace live in AppKit, UTTypeConformsTo in CoreServices.
    // Check the target, not the host, so cross builds link correctly.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        println!("cargo:rustc-link-lib=framework=AppKit");
        println!("cargo:rustc-link-lib=framework=CoreServices");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
