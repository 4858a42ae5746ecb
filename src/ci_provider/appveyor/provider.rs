use std::env;

use crate::ci_provider::{interfaces::UploadEnvironment, provider::CIProviderDetector};

#[derive(Debug)]
pub struct AppVeyorProvider {
    environment: UploadEnvironment,
}

impl AppVeyorProvider {
    pub fn from_process_env() -> Self {
        Self {
            environment: UploadEnvironment::from_process_env(),
        }
    }

    pub fn get_provider_name(&self) -> &'static str {
        "AppVeyor"
    }

    pub fn into_upload_environment(self) -> UploadEnvironment {
        self.environment
    }
}

impl CIProviderDetector for AppVeyorProvider {
    fn detect() -> bool {
        // AppVeyor sets `True` on Windows images and `true` on Linux ones
        env::var("APPVEYOR").is_ok_and(|value| value.eq_ignore_ascii_case("true"))
    }
}
