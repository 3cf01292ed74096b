use graphlet_parser::ast::Selection;
use graphlet_parser::ast::SelectionSet;
use graphlet_parser::ast::Value;
use indexmap::IndexMap;

/// Fluent, mutation-based construction of one [`Selection`].
///
/// Construction is bottom-up: a child is fully built before being moved
/// into its parent via [`SelectionBuilder::select`], so the tree is
/// owned by whichever root it ends up attached to and no handle ever
/// points into growable storage. Dropping an unattached builder simply
/// discards its subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionBuilder {
    alias: Option<String>,
    arguments: IndexMap<String, Value>,
    name: String,
    selections: Vec<Selection>,
}

impl SelectionBuilder {
    /// Sets the alias, the response key for this selection.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Adds an argument. A repeated name overwrites the earlier value:
    /// last write wins, no error raised.
    pub fn arg(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Appends a leaf child selection. Shorthand for
    /// `.select(SelectionBuilder::new(name))`.
    pub fn field(self, name: impl Into<String>) -> Self {
        self.select(SelectionBuilder::new(name))
    }

    /// Reconstructs a builder from a parsed [`Selection`].
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            alias: selection.alias.clone(),
            arguments: selection.arguments.clone(),
            name: selection.name.clone(),
            selections: selection.selection_set.selections.clone(),
        }
    }

    /// Consumes this builder to produce the [`Selection`] it
    /// accumulated.
    pub fn into_selection(self) -> Selection {
        Selection {
            alias: self.alias,
            arguments: self.arguments,
            name: self.name,
            selection_set: SelectionSet {
                selections: self.selections,
            },
        }
    }

    /// Creates a builder for a selection of the named field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: IndexMap::new(),
            name: name.into(),
            selections: vec![],
        }
    }

    /// Appends a fully-built child selection after any previously added
    /// children.
    pub fn select(mut self, child: SelectionBuilder) -> Self {
        self.selections.push(child.into_selection());
        self
    }
}
