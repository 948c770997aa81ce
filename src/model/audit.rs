//! Audit embeds posted to the log channel.
//!
//! An `AuditEmbed` is built fresh for every outcome worth reporting and handed to the
//! Discord platform layer, which renders it as a Serenity embed.

use chrono::{DateTime, Utc};
use serenity::utils::MessageBuilder;

use crate::{
    config::{FAILURE_COLOR, SUCCESS_COLOR},
    model::member::JoinedMember,
};

/// Discord rejects embed descriptions longer than this many characters.
pub const MAX_DESCRIPTION_LEN: usize = 4096;

/// Characters added around the failure text by the code block fences.
const CODE_BLOCK_OVERHEAD: usize = "```\n\n```".len();

/// Severity of an audit entry, rendered as the embed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditSeverity {
    Success,
    Failure,
}

impl AuditSeverity {
    pub fn color(self) -> u32 {
        match self {
            Self::Success => SUCCESS_COLOR,
            Self::Failure => FAILURE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEmbed {
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub severity: AuditSeverity,
}

impl AuditEmbed {
    /// Audit entry for a member that was verified and given the OSF Member role.
    ///
    /// The username is markdown-escaped so it cannot break out of the bold span.
    pub fn member_added(member: &JoinedMember) -> Self {
        let description = MessageBuilder::new()
            .mention(&member.user_id())
            .push(" **(")
            .push_safe(member.name.as_str())
            .push(format!(") ({})** was validated by the bot.", member.id))
            .build();

        Self {
            title: format!("OSF Member Added ({})", member.id),
            description,
            timestamp: Utc::now(),
            severity: AuditSeverity::Success,
        }
    }

    /// Audit entry for a validation request that could not be answered.
    ///
    /// The failure text comes from a remote service and is shown verbatim inside a code
    /// block with any code fences in it neutralised. Text that would not fit in an embed
    /// description is cut short and marked with `…`.
    pub fn validation_failed(member_id: u64, message: &str) -> Self {
        let mut budget = MAX_DESCRIPTION_LEN - CODE_BLOCK_OVERHEAD;
        let description = loop {
            let description = MessageBuilder::new()
                .push_codeblock_safe(truncate(message, budget), None)
                .build();

            // Escaping can lengthen the text, so shrink until it fits
            let len = description.chars().count();
            if len <= MAX_DESCRIPTION_LEN {
                break description;
            }
            budget = budget.saturating_sub(len - MAX_DESCRIPTION_LEN);
        };

        Self {
            title: format!("OSF Validation Failed ({})", member_id),
            description,
            timestamp: Utc::now(),
            severity: AuditSeverity::Failure,
        }
    }

    pub fn color(&self) -> u32 {
        self.severity.color()
    }
}

/// Cuts `text` to at most `max` characters, ending in `…` when shortened.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
