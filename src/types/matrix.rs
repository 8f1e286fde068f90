//! Square matrices indexed by vertex label.

/// A square matrix whose rows and columns follow `labels`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix<T, V> {
    /// Row/column labels in ascending order.
    pub labels: Vec<T>,
    /// `cells[i][j]` relates `labels[i]` to `labels[j]`.
    pub cells: Vec<Vec<V>>,
}

impl<T: Ord, V> LabeledMatrix<T, V> {
    /// Position of a label, if present.
    pub fn position(&self, label: &T) -> Option<usize> {
        self.labels.binary_search(label).ok()
    }

    /// Look up the cell relating `from` to `to`.
    pub fn get(&self, from: &T, to: &T) -> Option<&V> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        Some(&self.cells[i][j])
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.labels.len()
    }
}
