use core::fmt;

/// The placement of a first geometric object with respect to a second one.
///
/// Classification queries of this crate always describe the **first** argument relative
/// to the **second** one, unless their documentation states otherwise.
///
/// The declaration order matters: it is the order of the [`IntersectionType::and`] lattice,
/// from the weakest (`Same`) to the strongest (`Outside`) verdict.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntersectionType {
    /// The second object is the same as the first one.
    Same,
    /// The second object is entirely inside the first one.
    Enclosing,
    /// The first object is entirely inside the second one.
    Inside,
    /// The first object is intersecting the second one.
    Spanning,
    /// The first object is entirely outside the second one.
    Outside,
}

use IntersectionType::{Enclosing, Inside, Outside, Same, Spanning};

impl IntersectionType {
    /// All the variants, in lattice order.
    pub const ALL: [IntersectionType; 5] = [Same, Enclosing, Inside, Spanning, Outside];

    /// The AND-combination of two classifications.
    ///
    /// Combines the classifications of the same pair of objects obtained along two
    /// independent directions (e.g. two axes of a separating axis test):
    ///
    /// | and           | Same      | Enclosing | Inside   | Spanning | Outside |
    /// |---------------|-----------|-----------|----------|----------|---------|
    /// | **Same**      | Same      | Enclosing | Inside   | Spanning | Outside |
    /// | **Enclosing** | Enclosing | Enclosing | Spanning | Spanning | Outside |
    /// | **Inside**    | Inside    | Spanning  | Inside   | Spanning | Outside |
    /// | **Spanning**  | Spanning  | Spanning  | Spanning | Spanning | Outside |
    /// | **Outside**   | Outside   | Outside   | Outside  | Outside  | Outside |
    ///
    /// `Outside` absorbs everything, `Spanning` absorbs everything else, and `Same` is
    /// the identity. Being inside along one direction and enclosing along another one
    /// means the objects straddle each other: `Inside and Enclosing = Spanning`.
    #[inline]
    #[must_use]
    pub const fn and(self, other: IntersectionType) -> IntersectionType {
        match (self, other) {
            (Outside, _) | (_, Outside) => Outside,
            (Spanning, _) | (_, Spanning) => Spanning,
            (Inside, Enclosing) | (Enclosing, Inside) => Spanning,
            (Same, other) => other,
            (this, Same) => this,
            (Inside, Inside) => Inside,
            (Enclosing, Enclosing) => Enclosing,
        }
    }

    /// The OR-combination of two classifications.
    ///
    /// If `self` classifies an object `E` against `F1` and `other` classifies `E` against
    /// `F2`, then the result classifies `E` against the union of `F1` and `F2`:
    ///
    /// | or            | Same     | Enclosing | Inside | Spanning | Outside  |
    /// |---------------|----------|-----------|--------|----------|----------|
    /// | **Same**      | Same     | Spanning  | Inside | Spanning | Spanning |
    /// | **Enclosing** | Spanning | Enclosing | Inside | Spanning | Spanning |
    /// | **Inside**    | Inside   | Inside    | Inside | Inside   | Inside   |
    /// | **Spanning**  | Spanning | Spanning  | Inside | Spanning | Spanning |
    /// | **Outside**   | Spanning | Spanning  | Inside | Spanning | Outside  |
    #[inline]
    #[must_use]
    pub const fn or(self, other: IntersectionType) -> IntersectionType {
        match (self, other) {
            (Inside, _) | (_, Inside) => Inside,
            (Same, Same) => Same,
            (Enclosing, Enclosing) => Enclosing,
            (Spanning, Spanning) => Spanning,
            (Outside, Outside) => Outside,
            _ => Spanning,
        }
    }

    /// Swaps the roles of the two classified objects.
    ///
    /// `Inside` becomes `Enclosing` and vice-versa. Other variants are unchanged.
    #[inline]
    #[must_use]
    pub const fn invert(self) -> IntersectionType {
        match self {
            Inside => Enclosing,
            Enclosing => Inside,
            other => other,
        }
    }

    /// Is this classification anything but [`IntersectionType::Outside`]?
    #[inline]
    pub const fn is_intersecting(self) -> bool {
        !matches!(self, Outside)
    }
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Same => "same",
            Enclosing => "enclosing",
            Inside => "inside",
            Spanning => "spanning",
            Outside => "outside",
        };
        f.pad(name)
    }
}
