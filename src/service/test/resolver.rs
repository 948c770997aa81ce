use super::*;

/// Tests that the log channel is fetched once and then served from the cache.
///
/// Expected: both calls resolve, exactly one fetch and one readiness wait
#[tokio::test]
async fn log_channel_is_fetched_once() {
    let platform = healthy_platform();
    let resolver = resolver();

    let first = resolver.resolve_log_channel(&platform).await;
    let second = resolver.resolve_log_channel(&platform).await;

    assert_eq!(first.map(|c| c.id), Some(ChannelId::new(LOG_CHANNEL_ID)));
    assert_eq!(second.map(|c| c.id), Some(ChannelId::new(LOG_CHANNEL_ID)));
    assert_eq!(platform.channel_fetches(), 1);
    assert_eq!(platform.ready_waits(), 1);
}

/// Tests that concurrent first uses share a single fetch.
///
/// Expected: both callers resolve, exactly one fetch
#[tokio::test]
async fn concurrent_first_resolution_fetches_once() {
    let platform = healthy_platform();
    let resolver = resolver();

    let (first, second) = tokio::join!(
        resolver.resolve_log_channel(&platform),
        resolver.resolve_log_channel(&platform)
    );

    assert!(first.is_some());
    assert!(second.is_some());
    assert_eq!(platform.channel_fetches(), 1);
}

/// Tests that a missing log channel is not cached and is retried on the next call.
///
/// Expected: None twice, two fetches
#[tokio::test]
async fn missing_log_channel_is_retried() {
    let platform = MockPlatform::new();
    let resolver = resolver();

    assert!(resolver.resolve_log_channel(&platform).await.is_none());
    assert!(resolver.resolve_log_channel(&platform).await.is_none());
    assert_eq!(platform.channel_fetches(), 2);
}

/// Tests that a failing channel fetch degrades to an unresolved channel.
///
/// Expected: None, no panic
#[tokio::test]
async fn channel_fetch_error_yields_none() {
    let platform = healthy_platform().with_channel_error();
    let resolver = resolver();

    assert!(resolver.resolve_log_channel(&platform).await.is_none());
}

/// Tests that audit posts are dropped without error while the channel is unresolvable.
///
/// Verifies that sending stays safe across repeated calls and that resolution is
/// attempted again every time.
///
/// Expected: Ok(()) twice, nothing sent, two fetches
#[tokio::test]
async fn post_audit_without_channel_does_not_fail() {
    let platform = MockPlatform::new();
    let resolver = resolver();
    let embed = AuditEmbed::validation_failed(MEMBER_ID, "500: boom");

    assert!(resolver.post_audit(&platform, &embed).await.is_ok());
    assert!(resolver.post_audit(&platform, &embed).await.is_ok());
    assert!(platform.sent().is_empty());
    assert_eq!(platform.channel_fetches(), 2);
}

/// Tests that an unresolvable log channel is reported at error level.
///
/// Verifies that both the failed lookup and the dropped audit message are logged
/// while the post itself still succeeds.
///
/// Expected: Ok(()), ERROR lines naming the channel id and the dropped embed
#[tokio::test]
async fn missing_log_channel_is_logged_as_error() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let platform = MockPlatform::new();
    let resolver = resolver();
    let embed = AuditEmbed::validation_failed(MEMBER_ID, "500: boom");

    assert!(resolver.post_audit(&platform, &embed).await.is_ok());

    let output = logs.contents();
    assert!(output.contains("ERROR"), "{output}");
    assert!(
        output.contains("Failed to get log channel with ID (500)"),
        "{output}"
    );
    assert!(
        output.contains("Dropping audit message 'OSF Validation Failed (42)'"),
        "{output}"
    );
}

/// Tests that audit posts reach the configured log channel.
///
/// Expected: embed sent to LOG_CHANNEL_ID
#[tokio::test]
async fn post_audit_sends_to_log_channel() {
    let platform = healthy_platform();
    let resolver = resolver();
    let embed = AuditEmbed::validation_failed(MEMBER_ID, "500: boom");

    resolver.post_audit(&platform, &embed).await.unwrap();

    let sent = platform.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, ChannelId::new(LOG_CHANNEL_ID));
    assert_eq!(sent[0].1, embed);
}

/// Tests that the role is looked up once per guild.
///
/// Expected: one lookup for repeated use in the same guild, another after switching guild
#[tokio::test]
async fn role_cache_is_scoped_to_guild() {
    let platform = healthy_platform();
    let resolver = resolver();

    let guild = GuildId::new(GUILD_ID);
    let other_guild = GuildId::new(OTHER_GUILD_ID);

    assert!(resolver.resolve_privileged_role(&platform, guild).await.is_some());
    assert!(resolver.resolve_privileged_role(&platform, guild).await.is_some());
    assert_eq!(platform.role_lookups(), 1);

    assert!(resolver
        .resolve_privileged_role(&platform, other_guild)
        .await
        .is_some());
    assert_eq!(platform.role_lookups(), 2);
}

/// Tests granting the role to a member.
///
/// Expected: Ok(Granted), one grant of ROLE_ID to the member
#[tokio::test]
async fn grants_resolved_role() {
    let platform = healthy_platform();
    let resolver = resolver();

    let grant = resolver
        .grant_privileged_role(&platform, &joined_member())
        .await
        .unwrap();

    assert_eq!(grant, RoleGrant::Granted);
    assert_eq!(platform.grants(), vec![(MEMBER_ID, RoleId::new(ROLE_ID))]);
}

/// Tests that an unresolvable role skips the grant instead of sending an empty one.
///
/// Expected: Ok(Skipped), no grant attempted
#[tokio::test]
async fn unresolved_role_skips_grant() {
    let platform = MockPlatform::new()
        .with_channel(create_test_channel(LOG_CHANNEL_ID, GUILD_ID, "osf-log"));
    let resolver = resolver();

    let grant = resolver
        .grant_privileged_role(&platform, &joined_member())
        .await
        .unwrap();

    assert_eq!(grant, RoleGrant::Skipped);
    assert!(platform.grants().is_empty());
}

/// Tests that a role grant rejected by Discord is propagated.
///
/// Expected: Err(AppError)
#[tokio::test]
async fn rejected_grant_is_an_error() {
    let platform = healthy_platform().with_grant_error();
    let resolver = resolver();

    let result = resolver
        .grant_privileged_role(&platform, &joined_member())
        .await;

    assert!(result.is_err());
}
