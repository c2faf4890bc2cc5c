use indexmap::{IndexMap, IndexSet};

use crate::misc::{EvaluationError, EvaluationResult, FloatingPoint};

/// Ordered mapping of attribute name to value attached to a point
pub type Attributes<T> = IndexMap<String, AttributeValue<T>>;

/// Value of a single aesthetic attribute
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue<T> {
    /// Continuous value such as size or alpha
    Numeric(T),
    /// Level code into the column's category domain, see [`Schema::levels`]
    Categorical(usize),
}

impl<T: FloatingPoint> AttributeValue<T> {
    pub fn as_numeric(&self) -> Option<T> {
        match self {
            AttributeValue::Numeric(v) => Some(*v),
            AttributeValue::Categorical(_) => None,
        }
    }

    pub fn as_level(&self) -> Option<usize> {
        match self {
            AttributeValue::Categorical(code) => Some(*code),
            AttributeValue::Numeric(_) => None,
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, AttributeValue::Categorical(_))
    }

    /// Blend two values at `t` in [0, 1]
    /// Numeric values are mixed linearly, anything else holds `self`.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        match (self, other) {
            (AttributeValue::Numeric(a), AttributeValue::Numeric(b)) => {
                AttributeValue::Numeric(*a + (*b - *a) * t)
            }
            _ => *self,
        }
    }
}

/// Kind of an attribute column
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    Numeric,
    /// Categorical column with its full level domain in first-appearance order
    Categorical(IndexSet<String>),
}

/// Column layout shared by every point of a [`crate::prelude::ControlPointSet`]
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    columns: IndexMap<String, AttributeKind>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn kind(&self, name: &str) -> Option<&AttributeKind> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &AttributeKind)> {
        self.columns.iter().map(|(name, kind)| (name.as_str(), kind))
    }

    /// Full category domain of a categorical column
    pub fn levels(&self, name: &str) -> Option<&IndexSet<String>> {
        match self.columns.get(name)? {
            AttributeKind::Categorical(levels) => Some(levels),
            AttributeKind::Numeric => None,
        }
    }

    /// Resolve a level code back to its label
    pub fn level(&self, name: &str, code: usize) -> Option<&str> {
        self.levels(name)?.get_index(code).map(String::as_str)
    }

    /// Register a numeric column, failing if the name is already categorical
    pub fn declare_numeric(&mut self, name: &str) -> EvaluationResult<()> {
        match self.columns.get(name) {
            None => {
                self.columns.insert(name.to_string(), AttributeKind::Numeric);
                Ok(())
            }
            Some(AttributeKind::Numeric) => Ok(()),
            Some(AttributeKind::Categorical(_)) => Err(EvaluationError::invalid_argument(
                format!("attribute `{name}` is categorical, got a numeric value"),
            )),
        }
    }

    /// Intern a level of a categorical column and return its code
    pub fn intern_level(&mut self, name: &str, label: &str) -> EvaluationResult<usize> {
        let kind = self
            .columns
            .entry(name.to_string())
            .or_insert_with(|| AttributeKind::Categorical(IndexSet::new()));
        match kind {
            AttributeKind::Categorical(levels) => Ok(levels.insert_full(label.to_string()).0),
            AttributeKind::Numeric => Err(EvaluationError::invalid_argument(format!(
                "attribute `{name}` is numeric, got category `{label}`"
            ))),
        }
    }
}
