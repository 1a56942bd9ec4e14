use serde::{Deserialize, Serialize};

/// Holds the value of a string-array field in a generated data model. A field
/// that was never assigned holds no sequence at all, which is not the same
/// state as a field explicitly assigned an empty sequence.
///
/// Equality and hashing follow the held value only. Element order is whatever
/// the caller supplied and duplicates are allowed; constraints like uniqueness
/// or length limits are a validator's job, not this type's.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringArrayValue {
    // Not serialized while unset, so an absent field and an empty list remain
    // distinguishable to whatever serializes this
    #[serde(skip_serializing_if = "Option::is_none", default)]
    items: Option<Vec<String>>,
}

impl StringArrayValue {
    pub fn new(items: Option<Vec<String>>) -> Self {
        StringArrayValue { items }
    }

    /// Returns the held sequence, or `None` while the field is unset.
    pub fn items(&self) -> Option<&[String]> {
        self.items.as_deref()
    }

    pub fn has_items(&self) -> bool {
        self.items.is_some()
    }

    /// Replaces the held sequence entirely and returns the previous one.
    /// Passing `None` clears the field back to the unset state.
    pub fn set_items(
        &mut self,
        items: Option<Vec<String>>,
    ) -> Option<Vec<String>> {
        std::mem::replace(&mut self.items, items)
    }
}
