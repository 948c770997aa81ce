use std::fmt;
use thiserror::Error;

use crate::error::AppError;

/// Step of the member validation pipeline that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Granting the privileged role to a verified member
    GrantRole,
    /// Posting the audit embed to the log channel
    PostAudit,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrantRole => write!(f, "grant_role"),
            Self::PostAudit => write!(f, "post_audit"),
        }
    }
}

/// Failure of a single join event, tagged with where it happened.
///
/// Never fatal: the event handler logs it and moves on to the next event.
#[derive(Error, Debug)]
#[error("Member validation for {member_id} failed at stage {stage}: {source}")]
pub struct PipelineError {
    /// Discord user ID of the member being processed
    pub member_id: u64,
    /// Stage the failure occurred in
    pub stage: PipelineStage,
    /// The underlying error
    #[source]
    pub source: AppError,
}

impl PipelineError {
    pub fn new(member_id: u64, stage: PipelineStage, source: AppError) -> Self {
        Self {
            member_id,
            stage,
            source,
        }
    }
}
