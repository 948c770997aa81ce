use serenity::all::{Context, Member};

use crate::{
    model::member::JoinedMember,
    service::{
        discord::{ReadySignal, SerenityPlatform},
        member_validation::MemberValidationService,
    },
};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Runs the validation pipeline for the new member. Failures are logged and never
/// propagated, so one bad join cannot affect the next.
pub async fn handle_guild_member_addition(
    validation: &MemberValidationService,
    signal: &ReadySignal,
    ctx: Context,
    new_member: Member,
) {
    let member = JoinedMember::from(&new_member);
    let platform = SerenityPlatform::new(ctx.http.clone(), ctx.cache.clone(), signal.clone());

    tracing::debug!(
        "Validating {} ({}) who joined guild {}",
        member.name,
        member.id,
        member.guild_id
    );

    match validation.process_join(&platform, &member).await {
        Ok(outcome) => tracing::info!(
            "Processed join of {} ({}) in guild {}: {:?}",
            member.name,
            member.id,
            member.guild_id,
            outcome
        ),
        Err(e) => tracing::error!(
            "Member validation for {} ({}) failed at stage {}: {}",
            member.name,
            e.member_id,
            e.stage,
            e.source
        ),
    }
}
