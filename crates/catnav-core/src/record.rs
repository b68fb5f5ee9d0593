//! Category records as the backend serializes them.

use serde::{Deserialize, Deserializer};

/// Identifier of a category record.
pub type CategoryId = i64;

/// Parent reference in the shapes the ORM wire format produces.
///
/// A many2one field arrives as JSON `false` when unset, as a bare id,
/// or as an `[id, display_label]` pair. All three decode; absent fields
/// default to [`ParentRef::Absent`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParentRef {
    /// No parent declared (absent, `null`, or `false` on the wire).
    #[default]
    Absent,
    /// Bare parent id.
    Id(CategoryId),
    /// `[id, display_label]` relation pair.
    Pair(CategoryId, String),
}

impl ParentRef {
    /// Normalize to a plain optional id, discarding the display label.
    #[must_use]
    pub fn resolve(&self) -> Option<CategoryId> {
        match self {
            Self::Absent => None,
            Self::Id(id) | Self::Pair(id, _) => Some(*id),
        }
    }
}

impl<'de> Deserialize<'de> for ParentRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Flag(bool),
            Id(CategoryId),
            Pair(CategoryId, String),
        }

        // Any boolean means "no parent"; the backend only ever sends false.
        Ok(match Option::<Wire>::deserialize(deserializer)? {
            None | Some(Wire::Flag(_)) => Self::Absent,
            Some(Wire::Id(id)) => Self::Id(id),
            Some(Wire::Pair(id, label)) => Self::Pair(id, label),
        })
    }
}

/// One flat category row from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRecord {
    /// Unique id of the category.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Parent reference, in any of the wire shapes.
    #[serde(default, rename = "parent_id")]
    pub parent: ParentRef,
    /// Item count for this category, 0 when the source omits it.
    #[serde(default)]
    pub count: u64,
}

impl CategoryRecord {
    /// Create a record with no parent and a zero count.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: ParentRef::Absent,
            count: 0,
        }
    }

    /// Set the parent id.
    #[must_use]
    pub fn with_parent(mut self, parent: CategoryId) -> Self {
        self.parent = ParentRef::Id(parent);
        self
    }

    /// Set the item count.
    #[must_use]
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }
}
