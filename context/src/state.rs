//! Intermediate state passed between discovery pipeline stages.
//!
//! Discovery algorithms stash partial results on the context as they
//! run: a learned skeleton, separating sets, test counts. The bag is
//! deliberately schemaless, with no name or value-shape validation, so
//! stages can hand each other whatever they need.

use std::collections::HashMap;
use trellis_core::VariableSet;
use trellis_graph::SimpleGraph;

/// A value that can be stored as intermediate state.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    /// Boolean flag.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// A set of variables, e.g. a separating set.
    Variables(VariableSet),
    /// A working graph, e.g. a learned skeleton.
    Graph(SimpleGraph),
    /// List of values.
    List(Vec<StateValue>),
}

impl StateValue {
    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, StateValue::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, StateValue::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, StateValue::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, StateValue::String(_))
    }

    /// Returns true if this is a variable set.
    pub fn is_variables(&self) -> bool {
        matches!(self, StateValue::Variables(_))
    }

    /// Returns true if this is a graph.
    pub fn is_graph(&self) -> bool {
        matches!(self, StateValue::Graph(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StateValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StateValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            StateValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::String(text) => Some(text),
            _ => None,
        }
    }

    /// Get as variable set if this is a Variables value.
    pub fn as_variables(&self) -> Option<&VariableSet> {
        match self {
            StateValue::Variables(set) => Some(set),
            _ => None,
        }
    }

    /// Get as graph if this is a Graph value.
    pub fn as_graph(&self) -> Option<&SimpleGraph> {
        match self {
            StateValue::Graph(graph) => Some(graph),
            _ => None,
        }
    }

    /// Get as value slice if this is a List value.
    pub fn as_list(&self) -> Option<&[StateValue]> {
        match self {
            StateValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            StateValue::Bool(_) => "Bool",
            StateValue::Int(_) => "Int",
            StateValue::Float(_) => "Float",
            StateValue::String(_) => "String",
            StateValue::Variables(_) => "Variables",
            StateValue::Graph(_) => "Graph",
            StateValue::List(_) => "List",
        }
    }
}

// Convenient From implementations
impl From<bool> for StateValue {
    fn from(flag: bool) -> Self {
        StateValue::Bool(flag)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        StateValue::Int(value)
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        StateValue::Int(value as i64)
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        StateValue::Float(value)
    }
}

impl From<String> for StateValue {
    fn from(text: String) -> Self {
        StateValue::String(text)
    }
}

impl From<&str> for StateValue {
    fn from(text: &str) -> Self {
        StateValue::String(text.to_string())
    }
}

impl From<VariableSet> for StateValue {
    fn from(set: VariableSet) -> Self {
        StateValue::Variables(set)
    }
}

impl From<SimpleGraph> for StateValue {
    fn from(graph: SimpleGraph) -> Self {
        StateValue::Graph(graph)
    }
}

impl From<Vec<StateValue>> for StateValue {
    fn from(items: Vec<StateValue>) -> Self {
        StateValue::List(items)
    }
}

/// Type alias for intermediate-state storage.
pub type StateMap = HashMap<String, StateValue>;
