//! Update descriptions for incremental field mutations.
//!
//! Two mutators exist, mirroring the array operators the surrounding
//! application uses: append a value to a sequence field, and remove the
//! first occurrence of a value from one. Mutators on disjoint fields apply
//! independently; there is no ordering between push and pull effects.

use bson::Bson;

/// A single incremental field mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutator {
    /// Appends `value` to the array at `field`, creating an empty array
    /// first if the field is absent.
    Push {
        /// Name of the array field to append to.
        field: String,
        /// Value to append.
        value: Bson,
    },
    /// Removes the first element equal to `value` from the array at
    /// `field`; a no-op if the field or the value is absent.
    Pull {
        /// Name of the array field to remove from.
        field: String,
        /// Value to remove.
        value: Bson,
    },
}

/// An update description applied to a single document.
///
/// # Example
///
/// ```ignore
/// use docstub::update::Update;
///
/// let update = Update::new().push("participants", "kai@mergington.edu");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    /// Mutators applied to the target document.
    pub mutators: Vec<Mutator>,
}

impl Update {
    /// Creates an empty update.
    pub fn new() -> Self {
        Update { mutators: Vec::new() }
    }

    /// Adds an append mutator for the given array field.
    pub fn push(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.mutators.push(Mutator::Push {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a remove-first-occurrence mutator for the given array field.
    pub fn pull(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.mutators.push(Mutator::Pull {
            field: field.into(),
            value: value.into(),
        });
        self
    }
}

/// Summary of an `update_one` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// 1 if the target identifier existed, 0 otherwise. Reflects target
    /// existence, not whether any field actually changed.
    pub modified_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_mutators_in_order() {
        let update = Update::new()
            .push("participants", "kai@mergington.edu")
            .pull("participants", "daniel@mergington.edu");

        assert_eq!(
            update.mutators,
            vec![
                Mutator::Push {
                    field: "participants".to_string(),
                    value: Bson::String("kai@mergington.edu".to_string()),
                },
                Mutator::Pull {
                    field: "participants".to_string(),
                    value: Bson::String("daniel@mergington.edu".to_string()),
                },
            ]
        );
    }
}
