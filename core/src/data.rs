//! Tabular-data abstraction.
//!
//! Discovery algorithms consume columnar data, but context construction
//! only ever needs the column labels: which variables the data actually
//! observes. `Dataset` is that narrow seam; `DataTable` is the plain
//! carrier used when no richer data source is wired in.

use crate::{Variable, VariableSet};

/// Read access to the column labels of tabular data.
///
/// Object-safe so callers can pass a `&dyn Dataset` without committing
/// to a concrete source. Implementations must yield each column once,
/// in table order.
pub trait Dataset {
    /// The column labels, in table order.
    fn columns(&self) -> &[Variable];

    /// The column labels as a set.
    fn column_set(&self) -> VariableSet {
        self.columns().iter().cloned().collect()
    }
}

/// A minimal column-label carrier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    columns: Vec<Variable>,
}

impl DataTable {
    /// Create a table from column labels. Duplicates are dropped,
    /// keeping the first occurrence's position.
    pub fn new(columns: impl IntoIterator<Item = Variable>) -> Self {
        let mut seen = VariableSet::new();
        let mut unique = Vec::new();
        for column in columns {
            if seen.insert(column.clone()) {
                unique.push(column);
            }
        }
        Self { columns: unique }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has a column with this label.
    pub fn has_column(&self, variable: &Variable) -> bool {
        self.columns.contains(variable)
    }
}

impl Dataset for DataTable {
    fn columns(&self) -> &[Variable] {
        &self.columns
    }
}
