use std::path::PathBuf;

use url::Url;

use crate::app::UploadArgs;
use crate::prelude::*;
use crate::uploader::DEFAULT_UPLOAD_URL;

pub struct Config {
    pub upload_url: Url,
    pub token: Option<String>,
    pub report_path: PathBuf,
    pub fail_on_rejected: bool,
}

// Hand-written so the token never ends up in the logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("upload_url", &self.upload_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("report_path", &self.report_path)
            .field("fail_on_rejected", &self.fail_on_rejected)
            .finish()
    }
}

impl TryFrom<UploadArgs> for Config {
    type Error = Error;
    fn try_from(args: UploadArgs) -> Result<Self> {
        let raw_upload_url = args
            .upload_url
            .unwrap_or_else(|| DEFAULT_UPLOAD_URL.into());
        let upload_url = Url::parse(&raw_upload_url)
            .map_err(|e| anyhow!("Invalid upload URL: {raw_upload_url}, {e}"))?;

        Ok(Self {
            upload_url,
            token: args.token,
            report_path: args.report,
            fail_on_rejected: args.fail_on_rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> UploadArgs {
        UploadArgs {
            upload_url: None,
            token: None,
            fail_on_rejected: false,
            report: PathBuf::from("coverage.xml"),
        }
    }

    #[test]
    fn test_try_from_args_default() {
        let config = Config::try_from(args()).unwrap();
        assert_eq!(config.upload_url, Url::parse(DEFAULT_UPLOAD_URL).unwrap());
        assert_eq!(config.token, None);
        assert_eq!(config.report_path, PathBuf::from("coverage.xml"));
        assert!(!config.fail_on_rejected);
    }

    #[test]
    fn test_try_from_args_override() {
        let config = Config::try_from(UploadArgs {
            upload_url: Some("https://codecov.example.com/upload/v2".into()),
            token: Some("token".into()),
            fail_on_rejected: true,
            ..args()
        })
        .unwrap();
        assert_eq!(
            config.upload_url,
            Url::parse("https://codecov.example.com/upload/v2").unwrap()
        );
        assert_eq!(config.token, Some("token".into()));
        assert!(config.fail_on_rejected);
    }

    #[test]
    fn test_try_from_args_invalid_url() {
        let result = Config::try_from(UploadArgs {
            upload_url: Some("not a url".into()),
            ..args()
        });
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Invalid upload URL: not a url")
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let config = Config::try_from(UploadArgs {
            token: Some("secret-token".into()),
            ..args()
        })
        .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("***"));
    }
}
