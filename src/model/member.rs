use serenity::all::{Member, UserId};

/// A member that just joined a guild.
///
/// Snapshot of the fields the validation pipeline needs from the gateway member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedMember {
    /// Discord user ID
    pub id: u64,
    /// Discord username
    pub name: String,
    /// Guild the member joined
    pub guild_id: u64,
}

impl JoinedMember {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id)
    }
}

impl From<&Member> for JoinedMember {
    fn from(member: &Member) -> Self {
        Self {
            id: member.user.id.get(),
            name: member.user.name.clone(),
            guild_id: member.guild_id.get(),
        }
    }
}
