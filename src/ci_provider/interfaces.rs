use std::collections::HashMap;
use std::env;

use crate::helpers::get_var_or_empty;

pub const BRANCH_VAR: &str = "APPVEYOR_REPO_BRANCH";
pub const COMMIT_VAR: &str = "APPVEYOR_REPO_COMMIT";
pub const JOB_ID_VAR: &str = "APPVEYOR_JOB_ID";
pub const PULL_REQUEST_NUMBER_VAR: &str = "APPVEYOR_PULL_REQUEST_NUMBER";
pub const ACCOUNT_NAME_VAR: &str = "APPVEYOR_ACCOUNT_NAME";
pub const PROJECT_SLUG_VAR: &str = "APPVEYOR_PROJECT_SLUG";
pub const BUILD_VERSION_VAR: &str = "APPVEYOR_BUILD_VERSION";
pub const TOKEN_VAR: &str = "CODECOV_TOKEN";

/// Build metadata substituted into the upload URL.
///
/// Every field is a plain string. A variable missing from the source mapping
/// becomes an empty string, it is never an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UploadEnvironment {
    pub branch: String,
    pub commit: String,
    pub job_id: String,
    pub pull_request_number: String,
    pub account_name: String,
    pub project_slug: String,
    pub build_version: String,
    pub token: String,
}

impl UploadEnvironment {
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        Self {
            branch: get_var_or_empty(vars, BRANCH_VAR),
            commit: get_var_or_empty(vars, COMMIT_VAR),
            job_id: get_var_or_empty(vars, JOB_ID_VAR),
            pull_request_number: get_var_or_empty(vars, PULL_REQUEST_NUMBER_VAR),
            account_name: get_var_or_empty(vars, ACCOUNT_NAME_VAR),
            project_slug: get_var_or_empty(vars, PROJECT_SLUG_VAR),
            build_version: get_var_or_empty(vars, BUILD_VERSION_VAR),
            token: get_var_or_empty(vars, TOKEN_VAR),
        }
    }

    /// Snapshot of the process environment. Variables that are not valid
    /// unicode are skipped.
    pub fn from_process_env() -> Self {
        let vars: HashMap<String, String> = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self::from_vars(&vars)
    }

    /// The `<account>/<slug>/<version>` label identifying the job.
    pub fn job(&self) -> String {
        format!(
            "{}/{}/{}",
            self.account_name, self.project_slug, self.build_version
        )
    }

    pub fn set_token(&mut self, token: Option<String>) {
        if let Some(token) = token {
            self.token = token;
        }
    }
}

#[cfg(test)]
impl UploadEnvironment {
    /// Constructs a fully populated `UploadEnvironment` for testing purposes
    pub fn test() -> Self {
        Self {
            branch: "main".into(),
            commit: "5bd77cb0da72bef094893ed45fb793ff16ecfbe3".into(),
            job_id: "dvg6tbyd0q6mh3s5".into(),
            pull_request_number: "22".into(),
            account_name: "my-org".into(),
            project_slug: "sharp-blueprint".into(),
            build_version: "1.0.42".into(),
            token: "4b1c2f1e-0000-4d8e-a5d2-2b8d0e3a9f11".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use temp_env::with_vars;

    use super::*;

    #[test]
    fn test_from_vars() {
        let vars: HashMap<String, String> = [
            (BRANCH_VAR, "main"),
            (COMMIT_VAR, "5bd77cb0da72bef094893ed45fb793ff16ecfbe3"),
            (JOB_ID_VAR, "dvg6tbyd0q6mh3s5"),
            (PULL_REQUEST_NUMBER_VAR, "22"),
            (ACCOUNT_NAME_VAR, "my-org"),
            (PROJECT_SLUG_VAR, "sharp-blueprint"),
            (BUILD_VERSION_VAR, "1.0.42"),
            (TOKEN_VAR, "4b1c2f1e-0000-4d8e-a5d2-2b8d0e3a9f11"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

        let environment = UploadEnvironment::from_vars(&vars);
        assert_eq!(environment, UploadEnvironment::test());
    }

    #[test]
    fn test_from_vars_empty() {
        let environment = UploadEnvironment::from_vars(&HashMap::new());
        assert_eq!(environment, UploadEnvironment::default());
        assert_eq!(environment.job(), "//");
    }

    #[test]
    fn test_job() {
        assert_eq!(
            UploadEnvironment::test().job(),
            "my-org/sharp-blueprint/1.0.42"
        );
    }

    #[test]
    fn test_set_token() {
        let mut environment = UploadEnvironment::test();
        environment.set_token(None);
        assert_eq!(environment.token, "4b1c2f1e-0000-4d8e-a5d2-2b8d0e3a9f11");
        environment.set_token(Some("override".into()));
        assert_eq!(environment.token, "override");
    }

    #[test]
    fn test_from_process_env() {
        with_vars(
            [
                (BRANCH_VAR, Some("feat/coverage")),
                (COMMIT_VAR, Some("abc123")),
                (JOB_ID_VAR, None),
                (PULL_REQUEST_NUMBER_VAR, None),
                (ACCOUNT_NAME_VAR, Some("my-org")),
                (PROJECT_SLUG_VAR, Some("sharp-blueprint")),
                (BUILD_VERSION_VAR, Some("1.0.7")),
                (TOKEN_VAR, None),
            ],
            || {
                let environment = UploadEnvironment::from_process_env();
                assert_eq!(environment.branch, "feat/coverage");
                assert_eq!(environment.commit, "abc123");
                assert_eq!(environment.job_id, "");
                assert_eq!(environment.pull_request_number, "");
                assert_eq!(environment.token, "");
                assert_eq!(environment.job(), "my-org/sharp-blueprint/1.0.7");
            },
        );
    }
}
