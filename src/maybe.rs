use crate::base::*;
use crate::nodes::{integers_from, Concrete};
use std::fmt::{Display, Formatter};

/// The null-safe wrapper: an optional node reference with every operator lifted to tolerate
/// absence, so compositions keep working when an upstream operator yields an empty result.
/// Structural operators ([`map`](MaybeNode::map), [`filter`](MaybeNode::filter),
/// [`take_while`](MaybeNode::take_while), [`for_each`](MaybeNode::for_each)) propagate absence
/// quietly; the terminal [`fold`](MaybeNode::fold)/[`reduce`](MaybeNode::reduce) return an
/// explicitly undefined result, `None`.
#[derive(Clone)]
pub struct MaybeNode(Option<NodeRef>);

impl MaybeNode {
    pub fn new(node: Option<NodeRef>) -> MaybeNode {
        MaybeNode(node)
    }

    /// The wrapped node reference, if any.
    pub fn node(&self) -> Option<&NodeRef> {
        self.0.as_ref()
    }

    pub fn into_node(self) -> Option<NodeRef> {
        self.0
    }

    /// The payload at this position, or `None` on an absent node.
    pub fn value(&self) -> Result<Option<Value>, SeqError> {
        match &self.0 {
            Some(node) => Ok(Some(node.value()?)),
            None => Ok(None)
        }
    }

    pub fn next(&self) -> Result<MaybeNode, SeqError> {
        match &self.0 {
            Some(node) => Ok(MaybeNode(node.next()?)),
            None => Ok(self.clone())
        }
    }

    /// Always succeeds: prepending onto an absent node yields a one-element sequence.
    pub fn cons(&self, value: impl Into<Value>) -> MaybeNode {
        MaybeNode(Some(Concrete::new(value.into(), self.0.clone())))
    }

    pub fn map(&self, f: impl Fn(&Value) -> Result<Value, BaseError> + 'static) -> MaybeNode {
        match &self.0 {
            Some(node) => MaybeNode(Some(node.map(f))),
            None => self.clone()
        }
    }

    pub fn filter(&self, p: impl Fn(&Value) -> Result<bool, BaseError> + 'static)
        -> Result<MaybeNode, SeqError>
    {
        match &self.0 {
            Some(node) => Ok(MaybeNode(node.filter(p)?)),
            None => Ok(self.clone())
        }
    }

    pub fn take_while(&self, p: impl Fn(&Value) -> Result<bool, BaseError> + 'static)
        -> Result<MaybeNode, SeqError>
    {
        match &self.0 {
            Some(node) => Ok(MaybeNode(node.take_while(p)?)),
            None => Ok(self.clone())
        }
    }

    /// Concatenates `other` after this sequence. The left operand must be present; the right
    /// side may be absent.
    ///
    /// # Panics
    /// Panics if this wrapper is absent: merging from nothing is a programmer error.
    pub fn merge(&self, other: &MaybeNode) -> MaybeNode {
        let first = self.0.as_ref().expect("merge requires a present left operand");
        MaybeNode(Some(first.merge(other.0.clone())))
    }

    /// Invokes `f` on every value in order and returns the wrapper unchanged; a no-op on an
    /// absent node.
    pub fn for_each(&self, f: impl FnMut(&Value)) -> Result<MaybeNode, SeqError> {
        if let Some(node) = &self.0 {
            node.for_each(f)?;
        }
        Ok(self.clone())
    }

    /// Combines all values left to right into `init`; explicitly undefined (`None`) on an
    /// absent node.
    pub fn fold(&self, init: impl Into<Value>,
        f: impl Fn(Value, &Value) -> Result<Value, BaseError>) -> Result<Option<Value>, SeqError>
    {
        match &self.0 {
            Some(node) => Ok(Some(node.fold(init, f)?)),
            None => Ok(None)
        }
    }

    /// Combines all values seeded from the head; explicitly undefined (`None`) on an absent
    /// node.
    pub fn reduce(&self, f: impl Fn(Value, &Value) -> Result<Value, BaseError>)
        -> Result<Option<Value>, SeqError>
    {
        match &self.0 {
            Some(node) => Ok(Some(node.reduce(f)?)),
            None => Ok(None)
        }
    }
}

impl From<NodeRef> for MaybeNode {
    fn from(node: NodeRef) -> MaybeNode {
        MaybeNode(Some(node))
    }
}

impl From<Option<NodeRef>> for MaybeNode {
    fn from(node: Option<NodeRef>) -> MaybeNode {
        MaybeNode(node)
    }
}

impl Display for MaybeNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(node) => Display::fmt(node, f),
            None => write!(f, "[]")
        }
    }
}

/// A one-element null-safe sequence holding `value`.
pub fn value_of(value: impl Into<Value>) -> MaybeNode {
    MaybeNode(Some(Concrete::new(value.into(), None)))
}

/// The integers from zero upward, null-safe.
pub fn integers() -> MaybeNode {
    MaybeNode(Some(integers_from(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::*;

    #[test]
    fn absence_propagates_through_structural_operators() {
        let absent = MaybeNode::new(None);
        assert!(absent.value().unwrap().is_none());
        assert!(absent.next().unwrap().node().is_none());
        assert!(absent.map(plus(1)).node().is_none());
        assert!(absent.filter(leq(1)).unwrap().node().is_none());
        assert!(absent.take_while(leq(1)).unwrap().node().is_none());
        let mut visited = false;
        assert!(absent.for_each(|_| visited = true).unwrap().node().is_none());
        assert!(!visited);
    }

    #[test]
    fn fold_reduce_on_absent_are_undefined() {
        let absent = MaybeNode::new(None);
        assert_eq!(absent.fold(0, add).unwrap(), None);
        assert_eq!(absent.reduce(add).unwrap(), None);
    }

    #[test]
    fn cons_onto_nothing_yields_one_element() {
        let one = MaybeNode::new(None).cons(42);
        assert_eq!(one.value().unwrap(), Some(Value::from(42)));
        assert!(one.next().unwrap().node().is_none());
        assert_eq!(one.to_string(), "[42]");
    }

    #[test]
    fn empty_filter_result_composes_quietly() {
        let none = value_of(1).filter(leq(0)).unwrap();
        assert!(none.node().is_none());
        assert_eq!(none.map(plus(1)).fold(0, add).unwrap(), None);
    }

    #[test]
    fn reduce_arithmetic() {
        let w = value_of(5).cons(4).cons(3).cons(2).cons(1);
        assert_eq!(w.reduce(add).unwrap(), Some(Value::from(15)));
        assert_eq!(w.reduce(mul).unwrap(), Some(Value::from(120)));
    }

    #[test]
    fn factorial_by_composition() {
        let fact = integers().map(plus(1)).take_while(leq(6)).unwrap().reduce(mul).unwrap();
        assert_eq!(fact, Some(Value::from(720)));
    }

    #[test]
    fn bounded_prefix_of_the_integers() {
        let mut seen = Vec::new();
        integers().take_while(leq(6)).unwrap()
            .for_each(|value| seen.push(value.clone())).unwrap();
        let expected = (0..=6).map(Value::from).collect::<Vec<_>>();
        assert_eq!(seen, expected);
    }

    #[test]
    #[should_panic(expected = "merge requires a present left operand")]
    fn merge_from_nothing_is_a_programmer_error() {
        MaybeNode::new(None).merge(&value_of(1));
    }

    #[test]
    fn merge_with_absent_right_side() {
        let merged = value_of(1).cons(2).merge(&MaybeNode::new(None));
        assert_eq!(merged.reduce(add).unwrap(), Some(Value::from(3)));
    }

    #[test]
    fn displays_as_empty_when_absent() {
        assert_eq!(MaybeNode::new(None).to_string(), "[]");
    }
}
