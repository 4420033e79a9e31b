use crate::base::*;

/// An early-terminating prefix view: a support node whose value is already known to satisfy the
/// predicate. Advancing looks ahead exactly one position and ends the sequence at the first
/// failing value; no value is ever skipped.
#[derive(Clone)]
pub struct While {
    source: NodeRef,
    predicate: Predicate
}

impl While {
    /// Checks `predicate` on `node`'s own value: a failing head yields `None`, so a prefix view
    /// is never constructed around a value that already fails.
    pub(crate) fn guard(node: NodeRef, predicate: Predicate) -> Result<Option<NodeRef>, SeqError> {
        let value = node.value()?;
        if try_with!(&value, (predicate)(&value)?) {
            Ok(Some(NodeRef::new(While{source: node, predicate})))
        } else {
            Ok(None)
        }
    }
}

impl Node for While {
    fn value(&self) -> Result<Value, SeqError> {
        self.source.value()
    }

    fn next(&self) -> Result<Option<NodeRef>, SeqError> {
        match self.source.next()? {
            Some(next) => While::guard(next, self.predicate.clone()),
            None => Ok(None)
        }
    }
}
