/// A fixed, ordered, duplicate-free set of items to draw hands from.
///
/// Implementors build their items in one deterministic nested order, and
/// every downstream index (selector bits, hand order) refers to it.
pub trait Domain {
    type Item: Copy + Eq + std::fmt::Debug + std::fmt::Display;
    fn items(&self) -> &[Self::Item];
    fn size(&self) -> usize {
        self.items().len()
    }
    /// Position of `item` in the domain order.
    fn index(&self, item: &Self::Item) -> Option<usize> {
        self.items().iter().position(|x| x == item)
    }
}
