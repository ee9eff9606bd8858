use derive_more::{Display, Error};
use std::collections::HashSet;

#[derive(Display, Error, PartialEq, Eq, Debug)]
pub enum TranslateError {
    #[display("`{closer}` has no matching `{opener}`")]
    StructuralImbalance {
        closer: &'static str,
        opener: &'static str,
    },

    #[display("directive is shorter than its `{form}` form")]
    MalformedDirective { form: &'static str },
}

/// One monotonic id sequence shared by all directive families.
/// Loop labels and conditional labels are drawn from the same counter, so an
/// id is never reused within a run.
pub struct LabelGenerator {
    next: u32,
}
impl LabelGenerator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Ids of the currently open directives of one family. Depth equals the
/// nesting level of unmatched openers.
pub struct LabelStack {
    opener: &'static str,
    ids: Vec<u32>,
}
impl LabelStack {
    pub fn new(opener: &'static str) -> Self {
        Self {
            opener,
            ids: Vec::new(),
        }
    }

    pub fn push(&mut self, id: u32) {
        self.ids.push(id);
    }

    pub fn pop(&mut self, closer: &'static str) -> Result<u32, TranslateError> {
        self.ids.pop().ok_or(TranslateError::StructuralImbalance {
            closer,
            opener: self.opener,
        })
    }

    pub fn peek(&self, closer: &'static str) -> Result<u32, TranslateError> {
        self.ids
            .last()
            .copied()
            .ok_or(TranslateError::StructuralImbalance {
                closer,
                opener: self.opener,
            })
    }
}

/// Two independent namespaces of declared names. A global and a local sharing
/// the same text do not collide or shadow; each reserves its own storage.
pub struct VariableScopes {
    globals: HashSet<String>,
    locals: HashSet<String>,
    in_function: bool,
}
impl VariableScopes {
    pub fn new() -> Self {
        Self {
            globals: HashSet::new(),
            locals: HashSet::new(),
            in_function: false,
        }
    }

    pub fn enter_function(&mut self) {
        self.in_function = true;
    }

    /// Every local declared since the function start is forgotten.
    pub fn leave_function(&mut self) {
        self.in_function = false;
        self.locals.clear();
    }

    /// Returns whether `name` was new to the active scope. Redeclaration is a
    /// no-op; only the first declaration reserves storage.
    pub fn declare(&mut self, name: &str) -> bool {
        let scope = if self.in_function {
            &mut self.locals
        } else {
            &mut self.globals
        };
        scope.insert(String::from(name))
    }
}
