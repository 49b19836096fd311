//! Shape classifiers and the transitions keyed on them.

use std::fmt;

/// Cross-sectional family of a profile or a groove.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeTag {
    Round,
    Oval,
    Square,
    Diamond,
    Flat,
    /// Three rollers at 120°.
    ThreeFold,
}

impl ShapeTag {
    pub const ALL: [ShapeTag; 6] = [
        ShapeTag::Round,
        ShapeTag::Oval,
        ShapeTag::Square,
        ShapeTag::Diamond,
        ShapeTag::Flat,
        ShapeTag::ThreeFold,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeTag::Round => "round",
            ShapeTag::Oval => "oval",
            ShapeTag::Square => "square",
            ShapeTag::Diamond => "diamond",
            ShapeTag::Flat => "flat",
            ShapeTag::ThreeFold => "3fold",
        };
        f.write_str(name)
    }
}

/// Unordered set of [`ShapeTag`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShapeSet(u8);

impl ShapeSet {
    pub const EMPTY: ShapeSet = ShapeSet(0);

    pub const fn of(tag: ShapeTag) -> Self {
        ShapeSet(tag.bit())
    }

    pub const fn with(self, tag: ShapeTag) -> Self {
        ShapeSet(self.0 | tag.bit())
    }

    pub fn insert(&mut self, tag: ShapeTag) {
        self.0 |= tag.bit();
    }

    pub const fn contains(&self, tag: ShapeTag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ShapeTag> + '_ {
        ShapeTag::ALL.into_iter().filter(|tag| self.contains(*tag))
    }
}

impl FromIterator<ShapeTag> for ShapeSet {
    fn from_iter<I: IntoIterator<Item = ShapeTag>>(iter: I) -> Self {
        let mut set = ShapeSet::EMPTY;
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<const N: usize> From<[ShapeTag; N]> for ShapeSet {
    fn from(tags: [ShapeTag; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl fmt::Debug for ShapeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ordered pair (incoming profile shape, current pass shape).
///
/// `round -> oval` and `oval -> round` are different transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: ShapeTag,
    pub to: ShapeTag,
}

impl Transition {
    pub const fn new(from: ShapeTag, to: ShapeTag) -> Self {
        Self { from, to }
    }

    /// Whether the profile entering a pass and the pass itself carry this key.
    pub const fn matches(&self, incoming: ShapeSet, pass: ShapeSet) -> bool {
        incoming.contains(self.from) && pass.contains(self.to)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
