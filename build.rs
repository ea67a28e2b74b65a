fn main() {
    #[cfg(feature = "lapack")]
    {
        // Link against a system OpenBLAS, which bundles LAPACK.
        // On macOS: brew install openblas
        // On Ubuntu: apt install libopenblas-dev
        println!("cargo:rerun-if-env-changed=LAPACK_LIB_DIR");
        if let Ok(lib_dir) = std::env::var("LAPACK_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", lib_dir);
        } else if cfg!(target_os = "macos") {
            println!("cargo:rustc-link-search=native=/opt/homebrew/opt/openblas/lib");
            println!("cargo:rustc-link-search=native=/usr/local/opt/openblas/lib");
        }
        println!("cargo:rustc-link-lib=openblas");
    }
}
