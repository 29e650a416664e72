// Container trait - the page element a renderer writes into
use crate::domain::markup::Markup;

pub trait Container {
    /// Remove all existing children.
    fn clear(&mut self);

    fn append(&mut self, node: Markup);

    /// Commit step: full replace, never a patch.
    fn replace_children<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Markup>,
        Self: Sized,
    {
        self.clear();
        for node in nodes {
            self.append(node);
        }
    }
}

/// Bare list of children, used where no page is attached.
impl Container for Vec<Markup> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, node: Markup) {
        self.push(node);
    }
}
