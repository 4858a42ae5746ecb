pub mod interfaces;
mod provider;

pub use appveyor::AppVeyorProvider;
pub use interfaces::UploadEnvironment;
pub use provider::CIProviderDetector;

// Provider implementations
mod appveyor;
