// Suite tree snapshots
//
// Suites live in an arena owned by whoever drives the events. Reporters only
// see read-only `SuiteRef` handles into it.

use super::result::TestCase;
use tracing::warn;

/// Index of a suite inside its `SuiteTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuiteId(usize);

#[derive(Debug, Clone)]
struct Suite {
    title: String,
    parent: Option<SuiteId>,
    root: bool,
    tests: Vec<TestCase>,
}

/// Suite arena
#[derive(Debug, Clone, Default)]
pub struct SuiteTree {
    suites: Vec<Suite>,
}

impl SuiteTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the synthetic root suite. Its title is the empty sentinel.
    pub fn add_root(&mut self) -> SuiteId {
        self.insert(String::new(), None, true)
    }

    /// Add a titled suite under `parent`
    pub fn add_suite(&mut self, title: impl Into<String>, parent: Option<SuiteId>) -> SuiteId {
        self.insert(title.into(), parent, false)
    }

    /// Add a suite with every attribute spelled out
    pub fn insert(&mut self, title: String, parent: Option<SuiteId>, root: bool) -> SuiteId {
        let id = SuiteId(self.suites.len());
        self.suites.push(Suite {
            title,
            parent,
            root,
            tests: Vec::new(),
        });
        id
    }

    /// Attach a test directly to a suite. Returns false when the suite is unknown.
    pub fn add_test(&mut self, suite: SuiteId, test: TestCase) -> bool {
        match self.suites.get_mut(suite.0) {
            Some(entry) => {
                entry.tests.push(test);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: SuiteId) -> Option<SuiteRef<'_>> {
        (id.0 < self.suites.len()).then_some(SuiteRef { tree: self, id })
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

/// Read-only handle to one suite
#[derive(Debug, Clone, Copy)]
pub struct SuiteRef<'a> {
    tree: &'a SuiteTree,
    id: SuiteId,
}

impl<'a> SuiteRef<'a> {
    fn suite(&self) -> &'a Suite {
        &self.tree.suites[self.id.0]
    }

    pub fn id(&self) -> SuiteId {
        self.id
    }

    pub fn title(&self) -> &'a str {
        &self.suite().title
    }

    pub fn is_root(&self) -> bool {
        self.suite().root
    }

    pub fn parent(&self) -> Option<SuiteRef<'a>> {
        self.suite().parent.and_then(|id| self.tree.get(id))
    }

    /// Tests attached directly to this suite, excluding nested suites
    pub fn tests(&self) -> &'a [TestCase] {
        &self.suite().tests
    }

    /// Climb parent links to the topmost suite that still carries a title.
    ///
    /// Stops at the first suite whose parent is missing or untitled. The climb
    /// is bounded by the tree size, so a corrupted parent cycle cannot hang.
    pub fn topmost_titled(&self) -> SuiteRef<'a> {
        let mut current = *self;
        for _ in 0..self.tree.len() {
            match current.parent() {
                Some(parent) if !parent.title().is_empty() => current = parent,
                _ => return current,
            }
        }

        warn!(
            suite = self.title(),
            "Suite parent chain is deeper than the tree, stopping at '{}'",
            current.title()
        );
        current
    }
}
