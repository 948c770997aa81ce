//! Member validation pipeline run for every guild join.
//!
//! 1. Ask the validation API about the member.
//! 2. `Verified(true)`: grant the OSF Member role and post a success audit embed.
//! 3. `Failure(message)`: post a failure audit embed carrying the message.
//! 4. `Verified(false)`: do nothing.

use crate::{
    error::pipeline::{PipelineError, PipelineStage},
    model::{audit::AuditEmbed, member::JoinedMember, validation::ValidationResult},
    service::{
        discord::{DiscordPlatform, ResourceResolver, RoleGrant},
        validation::ValidationClient,
    },
};

/// What the pipeline did for a join event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Verified member, role granted and audit posted.
    Granted,
    /// Verified member, but the role could not be resolved. Audit still posted.
    GrantSkipped,
    /// The API answered that the member is not verified. Nothing was done.
    NotVerified,
    /// The API could not answer. Failure audit posted.
    Failed(String),
}

pub struct MemberValidationService {
    client: ValidationClient,
    resolver: ResourceResolver,
}

impl MemberValidationService {
    pub fn new(client: ValidationClient, resolver: ResourceResolver) -> Self {
        Self { client, resolver }
    }

    pub fn resolver(&self) -> &ResourceResolver {
        &self.resolver
    }

    /// Runs the validation pipeline for a member that just joined.
    ///
    /// # Arguments
    /// - `platform` - Discord operations for role grants and audit messages
    /// - `member` - The member that joined
    ///
    /// # Returns
    /// - `Ok(JoinOutcome)` - What the pipeline did
    /// - `Err(PipelineError)` - A Discord call failed; tagged with the stage it failed in
    pub async fn process_join<P: DiscordPlatform>(
        &self,
        platform: &P,
        member: &JoinedMember,
    ) -> Result<JoinOutcome, PipelineError> {
        match self.client.validate(member.id).await {
            ValidationResult::Verified(true) => {
                let grant = self
                    .resolver
                    .grant_privileged_role(platform, member)
                    .await
                    .map_err(|e| PipelineError::new(member.id, PipelineStage::GrantRole, e))?;

                self.post_audit(platform, member.id, AuditEmbed::member_added(member))
                    .await?;

                Ok(match grant {
                    RoleGrant::Granted => JoinOutcome::Granted,
                    RoleGrant::Skipped => JoinOutcome::GrantSkipped,
                })
            }
            ValidationResult::Verified(false) => {
                tracing::debug!(
                    "{} ({}) is not a verified OSF member, leaving as is",
                    member.name,
                    member.id
                );

                Ok(JoinOutcome::NotVerified)
            }
            ValidationResult::Failure(message) => {
                self.post_audit(
                    platform,
                    member.id,
                    AuditEmbed::validation_failed(member.id, &message),
                )
                .await?;

                Ok(JoinOutcome::Failed(message))
            }
        }
    }

    async fn post_audit<P: DiscordPlatform>(
        &self,
        platform: &P,
        member_id: u64,
        embed: AuditEmbed,
    ) -> Result<(), PipelineError> {
        self.resolver
            .post_audit(platform, &embed)
            .await
            .map_err(|e| PipelineError::new(member_id, PipelineStage::PostAudit, e))
    }
}
