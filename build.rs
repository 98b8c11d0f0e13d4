fn main() {
    println!("cargo:rerun-if-changed=sdkconfig.defaults");

    // ESP-IDF environment is only needed when building the flashable image.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
