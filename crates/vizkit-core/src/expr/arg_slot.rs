/// Addresses one value inside an [`Ast`](super::Ast): the chain node, the
/// argument name within that node and the position within the argument's
/// value list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgSlot {
    pub node: usize,
    pub name: String,
    pub index: usize,
}

impl ArgSlot {
    pub fn new(node: usize, name: impl Into<String>, index: usize) -> Self {
        Self {
            node,
            name: name.into(),
            index,
        }
    }

    /// The active value of `name` on the first function in the chain.
    pub fn first(name: impl Into<String>) -> Self {
        Self::new(0, name, 0)
    }
}

impl From<&str> for ArgSlot {
    fn from(name: &str) -> Self {
        Self::first(name)
    }
}
