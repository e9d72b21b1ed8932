fn main() {
    // Bindings come from the uniffi::setup_scaffolding!() proc-macro in
    // src/uniffi_bindings.rs, so there is no UDL file to compile here.
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
