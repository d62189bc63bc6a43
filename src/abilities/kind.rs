//! Abilities domain: the closed set of volt jumps.

/// The eight selectable volt jumps. Indices 0-7 follow the selector's
/// compass order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AbilityKind {
    #[default]
    Puff,
    RoundAbout,
    Bounce,
    Nibble,
    Spiral,
    ZapLine,
    CatchNChuck,
    Glide,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 8] = [
        AbilityKind::Puff,
        AbilityKind::RoundAbout,
        AbilityKind::Bounce,
        AbilityKind::Nibble,
        AbilityKind::Spiral,
        AbilityKind::ZapLine,
        AbilityKind::CatchNChuck,
        AbilityKind::Glide,
    ];

    pub fn index(self) -> usize {
        match self {
            AbilityKind::Puff => 0,
            AbilityKind::RoundAbout => 1,
            AbilityKind::Bounce => 2,
            AbilityKind::Nibble => 3,
            AbilityKind::Spiral => 4,
            AbilityKind::ZapLine => 5,
            AbilityKind::CatchNChuck => 6,
            AbilityKind::Glide => 7,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            AbilityKind::Puff => "Puff",
            AbilityKind::RoundAbout => "RoundAbout",
            AbilityKind::Bounce => "Bounce",
            AbilityKind::Nibble => "Nibble",
            AbilityKind::Spiral => "Spiral",
            AbilityKind::ZapLine => "ZapLine",
            AbilityKind::CatchNChuck => "CatchNChuck",
            AbilityKind::Glide => "Glide",
        }
    }

    /// Whether this ability keeps running after activation. The other five
    /// are explicit no-op variants: they consume charge and fire the
    /// animation triggers, nothing more.
    pub fn has_drive(self) -> bool {
        matches!(
            self,
            AbilityKind::Puff | AbilityKind::RoundAbout | AbilityKind::Spiral
        )
    }
}
