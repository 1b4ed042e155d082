//! AWS Route 53 implementation of [`DnsProvider`].

use aws_config::{BehaviorVersion, Region};
use aws_sdk_route53::Client;
use aws_sdk_route53::config::Credentials;
use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::types::{
    Change, ChangeAction as AwsChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet,
    RrType,
};

use super::{
    ChangeAction, ChangeConfirmation, DnsProvider, ProviderError, RecordChange, RecordChangeBatch,
    RecordType,
};

/// Default AWS profile.
pub const DEFAULT_PROFILE: &str = "default";

/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Where the AWS SDK should take its credentials from.
#[derive(Clone, PartialEq, Eq)]
pub enum AwsCredentials {
    /// A named profile from the shared AWS config files.
    Profile(String),

    /// Explicit access keys.
    Static {
        /// Access key id
        access_key_id: String,
        /// Secret access key
        secret_access_key: String,
        /// Session token for temporary credentials
        session_token: Option<String>,
    },
}

// Keys are never printed.
impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile(name) => f.debug_tuple("Profile").field(name).finish(),
            Self::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<REDACTED>")
                .finish_non_exhaustive(),
        }
    }
}

/// Route 53 provider client.
#[derive(Debug, Clone)]
pub struct Route53Provider {
    client: Client,
}

impl Route53Provider {
    /// Loads AWS configuration for `region` with the given credentials.
    pub async fn connect(region: &str, credentials: &AwsCredentials) -> Self {
        let loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()));

        let loader = match credentials {
            AwsCredentials::Profile(profile) => {
                tracing::debug!("Using AWS profile '{profile}' in {region}");
                loader.profile_name(profile)
            }
            AwsCredentials::Static {
                access_key_id,
                secret_access_key,
                session_token,
            } => {
                tracing::debug!("Using static AWS credentials in {region}");
                loader.credentials_provider(Credentials::new(
                    access_key_id,
                    secret_access_key,
                    session_token.clone(),
                    None,
                    "route53-ddns",
                ))
            }
        };

        Self::from_client(Client::new(&loader.load().await))
    }

    /// Wraps an already configured SDK client.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl DnsProvider for Route53Provider {
    async fn test_dns_answer(
        &self,
        zone_id: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, ProviderError> {
        let output = self
            .client
            .test_dns_answer()
            .hosted_zone_id(zone_id)
            .record_name(record_name)
            .record_type(rr_type(record_type))
            .send()
            .await
            .map_err(|e| ProviderError::Api(DisplayErrorContext(&e).to_string()))?;

        Ok(output.record_data().to_vec())
    }

    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        batch: &RecordChangeBatch,
    ) -> Result<ChangeConfirmation, ProviderError> {
        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(change_batch(batch)?)
            .send()
            .await
            .map_err(|e| ProviderError::Api(DisplayErrorContext(&e).to_string()))?;

        Ok(ChangeConfirmation {
            detail: format!("{:?}", output.change_info()),
        })
    }
}

const fn rr_type(record_type: RecordType) -> RrType {
    match record_type {
        RecordType::A => RrType::A,
        RecordType::Txt => RrType::Txt,
    }
}

const fn change_action(action: ChangeAction) -> AwsChangeAction {
    match action {
        ChangeAction::Upsert => AwsChangeAction::Upsert,
    }
}

fn change_batch(batch: &RecordChangeBatch) -> Result<ChangeBatch, ProviderError> {
    let mut builder = ChangeBatch::builder();
    for change in &batch.changes {
        builder = builder.changes(sdk_change(change)?);
    }
    builder
        .build()
        .map_err(|e| ProviderError::InvalidRequest(e.to_string()))
}

fn sdk_change(change: &RecordChange) -> Result<Change, ProviderError> {
    let invalid =
        |e: aws_sdk_route53::error::BuildError| ProviderError::InvalidRequest(e.to_string());

    let record = ResourceRecord::builder()
        .value(&change.value)
        .build()
        .map_err(invalid)?;

    let record_set = ResourceRecordSet::builder()
        .name(&change.name)
        .r#type(rr_type(change.record_type))
        .ttl(i64::from(change.ttl))
        .resource_records(record)
        .build()
        .map_err(invalid)?;

    Change::builder()
        .action(change_action(change.action))
        .resource_record_set(record_set)
        .build()
        .map_err(invalid)
}
