use std::time::Duration;

use serenity::all::{ChannelId, GuildId, RoleId};
use test_utils::{
    api::unreachable_base_url,
    builder::TestBuilder,
    error::TestError,
    serenity::{create_test_channel, create_test_member, create_test_role},
};

use crate::{
    config::{FAILURE_COLOR, SUCCESS_COLOR},
    error::pipeline::PipelineStage,
    model::{
        audit::{AuditEmbed, AuditSeverity},
        member::JoinedMember,
        validation::ValidationResult,
    },
    service::{
        discord::{ResourceResolver, RoleGrant},
        member_validation::{JoinOutcome, MemberValidationService},
        validation::ValidationClient,
    },
};

use logs::CapturedLogs;
use mock::MockPlatform;

mod resolver;
mod validation;

const GUILD_ID: u64 = 100;
const OTHER_GUILD_ID: u64 = 200;
const LOG_CHANNEL_ID: u64 = 500;
const ROLE_ID: u64 = 600;
const MEMBER_ID: u64 = 42;

fn joined_member() -> JoinedMember {
    JoinedMember::from(&create_test_member(MEMBER_ID, GUILD_ID, "alice"))
}

fn resolver() -> ResourceResolver {
    ResourceResolver::new(LOG_CHANNEL_ID, ROLE_ID)
}

/// Platform with a resolvable log channel and OSF Member role.
fn healthy_platform() -> MockPlatform {
    MockPlatform::new()
        .with_channel(create_test_channel(LOG_CHANNEL_ID, GUILD_ID, "osf-log"))
        .with_role(create_test_role(ROLE_ID, GUILD_ID, "OSF Member"))
}

fn service_for(base_url: impl Into<String>) -> MemberValidationService {
    MemberValidationService::new(
        ValidationClient::new(reqwest::Client::new(), base_url),
        resolver(),
    )
}
