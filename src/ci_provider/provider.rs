pub trait CIProviderDetector {
    /// Detects if the current environment is running inside the CI provider.
    fn detect() -> bool;
}
