use serenity::all::{ChannelId, GuildChannel, GuildId, Role, RoleId};
use serenity::async_trait;

use crate::{
    error::AppError,
    model::{audit::AuditEmbed, member::JoinedMember},
};

/// Operations the validation pipeline needs from Discord.
#[async_trait]
pub trait DiscordPlatform: Send + Sync {
    /// Suspends until the bot has connected and received its `ready` event.
    async fn wait_until_ready(&self);

    /// Fetches a guild channel by ID.
    ///
    /// # Returns
    /// - `Ok(Some(channel))` - The channel exists and is a guild channel
    /// - `Ok(None)` - The ID does not refer to a guild channel
    /// - `Err(AppError)` - The Discord API request failed
    async fn fetch_channel(&self, channel_id: ChannelId)
        -> Result<Option<GuildChannel>, AppError>;

    /// Looks up a role within a guild.
    ///
    /// # Returns
    /// - `Ok(Some(role))` - The guild has a role with this ID
    /// - `Ok(None)` - No such role in the guild
    /// - `Err(AppError)` - The Discord API request failed
    async fn guild_role(&self, guild_id: GuildId, role_id: RoleId)
        -> Result<Option<Role>, AppError>;

    /// Adds `role` to the member's roles.
    async fn add_role(&self, member: &JoinedMember, role: &Role) -> Result<(), AppError>;

    /// Posts `embed` as a message in `channel`.
    async fn send_embed(&self, channel: &GuildChannel, embed: &AuditEmbed)
        -> Result<(), AppError>;
}
