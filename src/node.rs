/// A link to a subtree. `None` marks the empty slot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single tree node. Each node exclusively owns its children, so a node
/// is freed exactly when its owning parent releases it.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(item: T) -> Self {
        Self {
            item,
            left: None,
            right: None,
        }
    }
}
