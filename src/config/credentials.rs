//! AWS credential selection.

use std::path::Path;

use serde::Deserialize;

use crate::dns::AwsCredentials;

use super::ConfigError;

/// JSON credentials file accepted by `--credentials`.
///
/// Either explicit keys or a profile name. Unknown keys are ignored so the
/// same file can carry settings for other tools.
#[derive(Debug, Default, Deserialize)]
struct CredentialsFile {
    aws_access_key_id: Option<String>,
    aws_secret_access_key: Option<String>,
    aws_session_token: Option<String>,
    profile_name: Option<String>,
}

/// Selects the credentials for the Route 53 client.
///
/// Without a file, or when the file does not exist, the configured profile is
/// used.
///
/// # Errors
///
/// Returns [`ConfigError::FileRead`] if an existing file cannot be read and
/// [`ConfigError::InvalidCredentials`] if it is not valid JSON or carries
/// neither a complete key pair nor a profile name.
pub fn load_credentials(path: Option<&Path>, profile: &str) -> Result<AwsCredentials, ConfigError> {
    let Some(path) = path else {
        return Ok(AwsCredentials::Profile(profile.to_string()));
    };

    if !path.is_file() {
        tracing::warn!(
            "Credentials file '{}' not found, using AWS profile '{profile}'",
            path.display()
        );
        return Ok(AwsCredentials::Profile(profile.to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_credentials(&content).map_err(|reason| ConfigError::InvalidCredentials {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_credentials(content: &str) -> Result<AwsCredentials, String> {
    let file: CredentialsFile = serde_json::from_str(content).map_err(|e| e.to_string())?;

    match (file.aws_access_key_id, file.aws_secret_access_key) {
        (Some(access_key_id), Some(secret_access_key)) => Ok(AwsCredentials::Static {
            access_key_id,
            secret_access_key,
            session_token: file.aws_session_token,
        }),
        (Some(_), None) => {
            Err("aws_access_key_id is set but aws_secret_access_key is missing".to_string())
        }
        (None, Some(_)) => {
            Err("aws_secret_access_key is set but aws_access_key_id is missing".to_string())
        }
        (None, None) => file
            .profile_name
            .map(AwsCredentials::Profile)
            .ok_or_else(|| {
                "expected aws_access_key_id/aws_secret_access_key or profile_name".to_string()
            }),
    }
}
