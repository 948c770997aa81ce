//! `/validate [member]` slash command.
//!
//! Resolves the member to re-validate, defaulting to the invoking user. Manual
//! re-validation is not wired to the validation pipeline yet: the command only
//! acknowledges the request, and members are validated when they join.

use serenity::all::{
    CommandDataOption, CommandDataOptionValue, CommandInteraction, CommandOptionType, Context,
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage, Mentionable, UserId,
};

use crate::error::AppError;

pub const NAME: &str = "validate";
pub const MEMBER_OPTION: &str = "member";

/// Builds the command definition registered with Discord.
pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Validate a member already in the server")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                MEMBER_OPTION,
                "Member to validate, defaults to you",
            )
            .required(false),
        )
}

/// Returns the user picked in the `member` option, if any.
pub fn member_option(options: &[CommandDataOption]) -> Option<UserId> {
    options
        .iter()
        .find(|option| option.name == MEMBER_OPTION)
        .and_then(|option| match option.value {
            CommandDataOptionValue::User(user_id) => Some(user_id),
            _ => None,
        })
}

/// Picks the member the command applies to: the given one, otherwise the invoker.
pub fn resolve_target(member: Option<UserId>, invoker: UserId) -> UserId {
    member.unwrap_or(invoker)
}

pub fn stub_reply(target: UserId) -> String {
    format!(
        "Manual validation of {} is not available yet. Members are validated automatically when they join.",
        target.mention()
    )
}

/// Runs the command for an incoming interaction.
///
/// Replies ephemerally to the invoking user.
pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let target = resolve_target(member_option(&command.data.options), command.user.id);

    tracing::info!(
        "/{} invoked by {} ({}) for {}",
        NAME,
        command.user.name,
        command.user.id,
        target
    );

    // TODO: run MemberValidationService for `target` once the expected reply format
    // for manual validation is agreed on.
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(stub_reply(target))
            .ephemeral(true),
    );

    command.create_response(&ctx.http, response).await?;

    Ok(())
}
