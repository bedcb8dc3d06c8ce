use std::fmt;

use serde::Serialize;

/// Opaque reference to a button's icon, e.g. an SF Symbol name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable button. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    index: usize,
}

impl Item {
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Builds the ordered item list, assigning indices by position.
pub fn items_from_ids<I, S>(ids: I) -> Vec<Item>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter()
        .enumerate()
        .map(|(index, id)| Item {
            id: ItemId::new(id),
            index,
        })
        .collect()
}
