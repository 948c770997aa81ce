//! Serenity-backed implementation of the Discord platform.

use serenity::all::{
    Cache, Channel, ChannelId, CreateEmbed, CreateMessage, GuildChannel, GuildId, Role, RoleId,
    Timestamp,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    error::{internal::InternalError, AppError},
    model::{audit::AuditEmbed, member::JoinedMember},
    service::discord::{platform::DiscordPlatform, ready::ReadySignal},
};

/// Reason recorded in the guild audit log when the role is granted.
const ROLE_GRANT_REASON: &str = "Validated as OSF member";

/// Discord platform operating over a gateway context's HTTP client and cache.
///
/// Cheap to construct; build one per event from the handler's `Context`.
pub struct SerenityPlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
    ready: ReadySignal,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>, ready: ReadySignal) -> Self {
        Self { http, cache, ready }
    }
}

#[async_trait]
impl DiscordPlatform for SerenityPlatform {
    async fn wait_until_ready(&self) {
        self.ready.wait().await;
    }

    async fn fetch_channel(
        &self,
        channel_id: ChannelId,
    ) -> Result<Option<GuildChannel>, AppError> {
        match self.http.get_channel(channel_id).await? {
            Channel::Guild(channel) => Ok(Some(channel)),
            _ => {
                tracing::warn!("Channel {} is not a guild channel", channel_id);
                Ok(None)
            }
        }
    }

    async fn guild_role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<Option<Role>, AppError> {
        let cached = self
            .cache
            .guild(guild_id)
            .and_then(|guild| guild.roles.get(&role_id).cloned());

        if let Some(role) = cached {
            return Ok(Some(role));
        }

        // Guild may not be cached yet right after startup
        let roles = self.http.get_guild_roles(guild_id).await?;

        Ok(roles.into_iter().find(|role| role.id == role_id))
    }

    async fn add_role(&self, member: &JoinedMember, role: &Role) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(member.guild_id),
                member.user_id(),
                role.id,
                Some(ROLE_GRANT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn send_embed(
        &self,
        channel: &GuildChannel,
        embed: &AuditEmbed,
    ) -> Result<(), AppError> {
        let unix = embed.timestamp.timestamp();
        let timestamp = Timestamp::from_unix_timestamp(unix).map_err(|e| {
            AppError::InternalErr(InternalError::InvalidDiscordTimestamp {
                timestamp: unix,
                reason: e.to_string(),
            })
        })?;

        let message = CreateMessage::new().embed(
            CreateEmbed::new()
                .title(&embed.title)
                .description(&embed.description)
                .timestamp(timestamp)
                .color(embed.color()),
        );

        channel.id.send_message(&self.http, message).await?;

        Ok(())
    }
}
