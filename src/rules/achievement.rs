//! Achievement tiers earned by accumulated wins

/// Award level derived from a player's win count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum AchievementTier {
    #[display("No award yet")]
    Unranked,
    #[display("Bronze Player")]
    Bronze,
    #[display("Silver Master")]
    Silver,
    #[display("Gold Legend")]
    Gold,
}

impl AchievementTier {
    /// Awarded tiers, highest first
    pub const AWARDS: [AchievementTier; 3] = [
        AchievementTier::Gold,
        AchievementTier::Silver,
        AchievementTier::Bronze,
    ];

    /// Minimum wins needed for this tier (inclusive)
    pub const fn threshold(self) -> u32 {
        match self {
            AchievementTier::Unranked => 0,
            AchievementTier::Bronze => 5,
            AchievementTier::Silver => 10,
            AchievementTier::Gold => 20,
        }
    }

    /// Medal shown next to the label
    pub const fn medal(self) -> &'static str {
        match self {
            AchievementTier::Unranked => "",
            AchievementTier::Bronze => "🥉",
            AchievementTier::Silver => "🥈",
            AchievementTier::Gold => "🥇",
        }
    }
}

/// Highest tier whose threshold `wins` reaches
pub fn achievement(wins: u32) -> AchievementTier {
    AchievementTier::AWARDS
        .into_iter()
        .find(|tier| wins >= tier.threshold())
        .unwrap_or(AchievementTier::Unranked)
}
