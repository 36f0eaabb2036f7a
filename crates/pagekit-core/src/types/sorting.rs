//! Sorting types for table endpoints.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Interpret a direction query value. Only `"desc"` sorts descending.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Numeric form used in serialized sort filters: `1` or `-1`.
    pub fn as_i8(&self) -> i8 {
        match self {
            Self::Asc => 1,
            Self::Desc => -1,
        }
    }
}

/// A sort specification consisting of a field name and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Column or field name to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Ordered column → direction mapping.
///
/// Entry order is tie-break precedence: the first column is the primary
/// sort key. Serializes as a JSON object whose values are `1` or `-1`, with
/// keys emitted in precedence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortFilter {
    fields: Vec<SortField>,
}

impl SortFilter {
    /// Create an empty sort filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column. A column that is already present keeps its position and
    /// takes the new direction.
    pub fn push(&mut self, field: impl Into<String>, direction: SortDirection) {
        let field = field.into();
        match self.fields.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.direction = direction,
            None => self.fields.push(SortField::new(field, direction)),
        }
    }

    /// Direction for a column, if present.
    pub fn get(&self, field: &str) -> Option<SortDirection> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.direction)
    }

    /// Iterate over the entries in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &SortField> {
        self.fields.iter()
    }

    /// Column names in precedence order.
    pub fn columns(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }

    /// Whether no column is set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<SortField>> for SortFilter {
    fn from(fields: Vec<SortField>) -> Self {
        let mut filter = Self::new();
        for f in fields {
            filter.push(f.field, f.direction);
        }
        filter
    }
}

impl Serialize for SortFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for f in &self.fields {
            map.serialize_entry(&f.field, &f.direction.as_i8())?;
        }
        map.end()
    }
}
