/// Label identifying the environment this uploader runs in.
pub fn runtime_version_label() -> &'static str {
    concat!("codecov-appveyor v", env!("CARGO_PKG_VERSION"), " (Rust)")
}
