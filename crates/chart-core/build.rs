// File: crates/chart-core/build.rs
// Summary: Link the Windows system libraries Skia's font manager and ICU need for label shaping.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by the system font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
