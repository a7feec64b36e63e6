// File: crates/popchart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs at runtime.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia/ICU reads font registry keys (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
