use crate::base::*;
use std::rc::Rc;

/// A node whose payload and successor are produced by callables rather than stored literally,
/// enabling unbounded sequences without materializing them. The continuation is recomputed
/// afresh on each call, so repeated access is idempotent but not cached; independent traversals
/// from multiple positions never interfere.
#[derive(Clone)]
pub struct Generator {
    value: Producer,
    next: Continuation
}

impl Generator {
    pub fn new(value: impl Fn() -> Value + 'static,
        next: impl Fn() -> Option<NodeRef> + 'static) -> NodeRef
    {
        NodeRef::new(Generator{value: Rc::new(value), next: Rc::new(next)})
    }
}

impl Node for Generator {
    fn value(&self) -> Result<Value, SeqError> {
        Ok((self.value)())
    }

    fn next(&self) -> Result<Option<NodeRef>, SeqError> {
        Ok((self.next)())
    }
}

/// The unbounded sequence `from`, `from + 1`, `from + 2`, ...
pub fn integers_from(from: impl Into<Number>) -> NodeRef {
    fn step(value: Number) -> NodeRef {
        Generator::new(
            { let value = value.clone(); move || Value::Number(value.clone()) },
            move || Some(step(&value + 1))
        )
    }
    step(from.into())
}

/// An unbounded sequence repeating `value`; the tail reproduces the node itself.
pub fn constant(value: impl Into<Value>) -> NodeRef {
    fn again(value: Value) -> NodeRef {
        Generator::new(
            { let value = value.clone(); move || value.clone() },
            move || Some(again(value.clone()))
        )
    }
    again(value.into())
}
