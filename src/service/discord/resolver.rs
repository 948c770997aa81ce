//! Lazily resolved Discord handles used by the validation pipeline.
//!
//! The log channel and the OSF Member role are looked up on first use and cached for the
//! rest of the process. Each slot sits behind an async mutex held across the lookup, so
//! concurrent first uses wait for a single fetch instead of racing. A failed lookup leaves
//! the slot empty and the next use tries again.

use serenity::all::{ChannelId, GuildChannel, GuildId, Role, RoleId};
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    model::{audit::AuditEmbed, member::JoinedMember},
    service::discord::platform::DiscordPlatform,
};

/// Result of trying to give a member the OSF Member role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGrant {
    /// The role was added to the member.
    Granted,
    /// The role could not be resolved, so no grant was attempted.
    Skipped,
}

/// Role slot, remembering which guild the role was resolved in.
struct CachedRole {
    guild_id: GuildId,
    role: Role,
}

pub struct ResourceResolver {
    log_channel_id: ChannelId,
    role_id: RoleId,
    log_channel: Mutex<Option<GuildChannel>>,
    privileged_role: Mutex<Option<CachedRole>>,
}

impl ResourceResolver {
    /// Creates a resolver with both slots empty.
    ///
    /// # Arguments
    /// - `log_channel_id` - Non-zero ID of the audit log channel
    /// - `role_id` - Non-zero ID of the OSF Member role
    pub fn new(log_channel_id: u64, role_id: u64) -> Self {
        Self {
            log_channel_id: ChannelId::new(log_channel_id),
            role_id: RoleId::new(role_id),
            log_channel: Mutex::new(None),
            privileged_role: Mutex::new(None),
        }
    }

    /// Returns the audit log channel, fetching it on first use.
    ///
    /// Waits for the bot to be ready before fetching. A failed fetch is logged and
    /// yields `None`; it is retried on the next call.
    pub async fn resolve_log_channel<P: DiscordPlatform>(
        &self,
        platform: &P,
    ) -> Option<GuildChannel> {
        let mut slot = self.log_channel.lock().await;

        if let Some(channel) = slot.as_ref() {
            return Some(channel.clone());
        }

        platform.wait_until_ready().await;

        match platform.fetch_channel(self.log_channel_id).await {
            Ok(Some(channel)) => {
                tracing::debug!("Resolved log channel #{} ({})", channel.name, channel.id);
                *slot = Some(channel.clone());
                Some(channel)
            }
            Ok(None) => {
                tracing::error!("Failed to get log channel with ID ({})", self.log_channel_id);
                None
            }
            Err(e) => {
                tracing::error!(
                    "Failed to get log channel with ID ({}): {}",
                    self.log_channel_id,
                    e
                );
                None
            }
        }
    }

    /// Returns the OSF Member role of `guild_id`, looking it up on first use.
    ///
    /// The slot holds one role. If it was resolved for a different guild it is looked
    /// up again for this one and replaced.
    pub async fn resolve_privileged_role<P: DiscordPlatform>(
        &self,
        platform: &P,
        guild_id: GuildId,
    ) -> Option<Role> {
        let mut slot = self.privileged_role.lock().await;

        if let Some(cached) = slot.as_ref().filter(|cached| cached.guild_id == guild_id) {
            return Some(cached.role.clone());
        }

        platform.wait_until_ready().await;

        match platform.guild_role(guild_id, self.role_id).await {
            Ok(Some(role)) => {
                tracing::debug!(
                    "Resolved role {} ({}) in guild {}",
                    role.name,
                    role.id,
                    guild_id
                );
                *slot = Some(CachedRole {
                    guild_id,
                    role: role.clone(),
                });
                Some(role)
            }
            Ok(None) => {
                tracing::error!(
                    "Failed to get OSF Member role with ID ({}) in guild {}",
                    self.role_id,
                    guild_id
                );
                None
            }
            Err(e) => {
                tracing::error!(
                    "Failed to get OSF Member role with ID ({}) in guild {}: {}",
                    self.role_id,
                    guild_id,
                    e
                );
                None
            }
        }
    }

    /// Gives `member` the OSF Member role.
    ///
    /// When the role cannot be resolved the grant is skipped and logged rather than
    /// attempted with no role.
    ///
    /// # Returns
    /// - `Ok(RoleGrant::Granted)` - Role added
    /// - `Ok(RoleGrant::Skipped)` - Role unresolved, nothing sent to Discord
    /// - `Err(AppError)` - Discord rejected the role grant
    pub async fn grant_privileged_role<P: DiscordPlatform>(
        &self,
        platform: &P,
        member: &JoinedMember,
    ) -> Result<RoleGrant, AppError> {
        let guild_id = GuildId::new(member.guild_id);

        let Some(role) = self.resolve_privileged_role(platform, guild_id).await else {
            tracing::error!(
                "Skipping OSF Member role grant for {} ({}): role unavailable",
                member.name,
                member.id
            );
            return Ok(RoleGrant::Skipped);
        };

        platform.add_role(member, &role).await?;

        tracing::info!(
            "Granted role {} to {} ({}) in guild {}",
            role.name,
            member.name,
            member.id,
            guild_id
        );

        Ok(RoleGrant::Granted)
    }

    /// Posts an audit embed to the log channel.
    ///
    /// If the channel cannot be resolved the embed is dropped with an error log.
    pub async fn post_audit<P: DiscordPlatform>(
        &self,
        platform: &P,
        embed: &AuditEmbed,
    ) -> Result<(), AppError> {
        let Some(channel) = self.resolve_log_channel(platform).await else {
            tracing::error!(
                "Dropping audit message '{}': log channel unavailable",
                embed.title
            );
            return Ok(());
        };

        platform.send_embed(&channel, embed).await
    }
}
