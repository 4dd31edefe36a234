//! Query and Change Descriptions
//!
//! The only query shapes the bot ever issues: match everything, match a
//! field exactly, match a value inside an array field, or any-of over those.
//! Updates are a flat list of set/increment/push operations applied to a
//! JSON document.

use serde_json::Value;

// == Filter ==
/// A document query.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document
    All,
    /// Field equals value
    Eq(String, Value),
    /// Array field contains value
    Contains(String, Value),
    /// Any of the inner filters match
    AnyOf(Vec<Filter>),
}

impl Filter {
    /// Matches every document in the collection.
    pub fn all() -> Self {
        Filter::All
    }

    /// Matches documents whose `field` equals `value`.
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Filter::Eq(field.to_string(), value.into())
    }

    /// Matches documents whose array `field` contains `value`.
    pub fn contains(field: &str, value: impl Into<Value>) -> Self {
        Filter::Contains(field.to_string(), value.into())
    }

    /// Matches documents satisfying at least one of `filters`.
    pub fn any_of(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::AnyOf(filters.into_iter().collect())
    }

    // == Matching ==
    /// Evaluates the filter against a JSON document.
    pub fn matches(&self, document: &Value) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq(field, value) => document.get(field) == Some(value),
            Filter::Contains(field, value) => document
                .get(field)
                .and_then(Value::as_array)
                .is_some_and(|items| items.contains(value)),
            Filter::AnyOf(filters) => filters.iter().any(|f| f.matches(document)),
        }
    }
}

// == Update ==
/// An ordered list of field changes to apply to a matched document.
#[derive(Debug, Clone, Default)]
pub struct Update {
    ops: Vec<UpdateOp>,
}

#[derive(Debug, Clone)]
enum UpdateOp {
    Set(String, Value),
    Inc(String, i64),
    Push(String, Value),
}

impl Update {
    /// Creates an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to `value`.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.ops.push(UpdateOp::Set(field.to_string(), value.into()));
        self
    }

    /// Adds `amount` to the numeric `field` (missing fields start at zero).
    pub fn inc(mut self, field: &str, amount: i64) -> Self {
        self.ops.push(UpdateOp::Inc(field.to_string(), amount));
        self
    }

    /// Appends `value` to the array `field` (missing fields start empty).
    pub fn push(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.ops
            .push(UpdateOp::Push(field.to_string(), value.into()));
        self
    }

    /// True if no changes were recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    // == Application ==
    /// Applies the change set to a JSON object document in order.
    ///
    /// Non-object documents are left untouched.
    pub fn apply(&self, document: &mut Value) {
        let Some(object) = document.as_object_mut() else {
            return;
        };

        for op in &self.ops {
            match op {
                UpdateOp::Set(field, value) => {
                    object.insert(field.clone(), value.clone());
                }
                UpdateOp::Inc(field, amount) => {
                    let current = object.get(field).and_then(Value::as_i64).unwrap_or(0);
                    object.insert(field.clone(), Value::from(current + amount));
                }
                UpdateOp::Push(field, value) => {
                    let items = object
                        .entry(field.clone())
                        .or_insert_with(|| Value::Array(Vec::new()));
                    if let Some(items) = items.as_array_mut() {
                        items.push(value.clone());
                    }
                }
            }
        }
    }
}
