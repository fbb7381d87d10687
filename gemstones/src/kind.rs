use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The grade a [`Kind`] of gemstone belongs to.
pub enum Tier {
    Precious,
    SemiPrecious,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The mineral a [`Gemstone`](crate::Gemstone) is made of.
pub enum Kind {
    Diamond,
    Emerald,
    Rubin,
    Agate,
    Opal,
    Lazurite,
}

impl Kind {
    /// Every kind, precious ones first.
    pub const ALL: [Self; 6] = [
        Self::Diamond,
        Self::Emerald,
        Self::Rubin,
        Self::Agate,
        Self::Opal,
        Self::Lazurite,
    ];

    #[must_use]
    #[inline]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Diamond | Self::Emerald | Self::Rubin => Tier::Precious,
            Self::Agate | Self::Opal | Self::Lazurite => Tier::SemiPrecious,
        }
    }

    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamond => "Diamond",
            Self::Emerald => "Emerald",
            Self::Rubin => "Rubin",
            Self::Agate => "Agate",
            Self::Opal => "Opal",
            Self::Lazurite => "Lazurite",
        }
    }
}

impl Tier {
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Precious => "PreciousGemstone",
            Self::SemiPrecious => "SemiPreciousGemstone",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
