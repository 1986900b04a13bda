fn main() {
    // ESP-IDF link arguments are only needed when building for the target.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
