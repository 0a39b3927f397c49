//! Field kinds and accepted-kind sets.

use smallvec::SmallVec;

/// Runtime kind of a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Unsigned decimal integer (stored as i64)
    Integer,
    /// Boolean (true/false)
    Boolean,
    /// UTF-8 string
    Text,
    /// Absent value
    Null,
}

impl FieldKind {
    /// Human-readable kind name for display and error messages.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Integer => "Integer",
            FieldKind::Boolean => "Boolean",
            FieldKind::Text => "Text",
            FieldKind::Null => "Null",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Non-empty set of kinds a field accepts.
///
/// Stored as a bitset so whole table schemas can live in a `static`.
/// Constructed from one of the three base consts, optionally widened
/// with [`FieldSpec::or_null`]; there is no way to build an empty set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec(u8);

const INTEGER_BIT: u8 = 1 << 0;
const BOOLEAN_BIT: u8 = 1 << 1;
const TEXT_BIT: u8 = 1 << 2;
const NULL_BIT: u8 = 1 << 3;

impl FieldSpec {
    /// Required integer field.
    pub const INTEGER: Self = FieldSpec(INTEGER_BIT);

    /// Required boolean field.
    pub const BOOLEAN: Self = FieldSpec(BOOLEAN_BIT);

    /// Required text field.
    pub const TEXT: Self = FieldSpec(TEXT_BIT);

    /// Widen the accepted set to also allow the null kind.
    pub const fn or_null(self) -> Self {
        FieldSpec(self.0 | NULL_BIT)
    }

    /// Union of two accepted sets. The coercion rules are defined over
    /// arbitrary unions (a digit token in an Integer|Boolean field
    /// always becomes an integer), though no current table field uses a
    /// multi-kind union beyond nullability.
    pub const fn or(self, other: Self) -> Self {
        FieldSpec(self.0 | other.0)
    }

    /// Whether `kind` is a member of this accepted set.
    pub const fn contains(self, kind: FieldKind) -> bool {
        let bit = match kind {
            FieldKind::Integer => INTEGER_BIT,
            FieldKind::Boolean => BOOLEAN_BIT,
            FieldKind::Text => TEXT_BIT,
            FieldKind::Null => NULL_BIT,
        };
        self.0 & bit != 0
    }

    /// Whether the field may hold a null value.
    pub const fn is_nullable(self) -> bool {
        self.0 & NULL_BIT != 0
    }

    /// Members of the set, in the fixed Integer, Boolean, Text, Null order.
    pub fn kinds(self) -> SmallVec<[FieldKind; 4]> {
        let mut kinds = SmallVec::new();
        for kind in [
            FieldKind::Integer,
            FieldKind::Boolean,
            FieldKind::Text,
            FieldKind::Null,
        ] {
            if self.contains(kind) {
                kinds.push(kind);
            }
        }
        kinds
    }
}

impl std::fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, kind) in self.kinds().into_iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FieldSpec({self})")
    }
}
