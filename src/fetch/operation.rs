use std::fmt;

/// Identifier of a fetch attempt. Later attempts get larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationId(u64);

impl OperationId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which backend call an operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Regular fetch that may fail at random.
    Normal,
    /// Fetch that always fails.
    Failing,
}

/// One asynchronous fetch attempt.
///
/// Never mutated after creation. Its outcome arrives separately as a
/// [`FetchSettled`](super::FetchSettled) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOperation {
    id: OperationId,
    kind: FetchKind,
}

impl FetchOperation {
    pub fn new(id: OperationId, kind: FetchKind) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> OperationId {
        self.id
    }

    pub fn kind(&self) -> FetchKind {
        self.kind
    }
}
