use crate::base::*;

/// An eager cons cell: a literal value and an optional shared tail.
#[derive(Clone)]
pub struct Concrete {
    value: Value,
    next: Option<NodeRef>
}

impl Concrete {
    pub(crate) fn new(value: Value, next: Option<NodeRef>) -> NodeRef {
        NodeRef::new(Concrete{value, next})
    }
}

impl Node for Concrete {
    fn value(&self) -> Result<Value, SeqError> {
        Ok(self.value.clone())
    }

    fn next(&self) -> Result<Option<NodeRef>, SeqError> {
        Ok(self.next.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::base::*;
    use crate::testutils::*;

    #[test]
    fn cons_reverses_construction_order() {
        let node = chain(&[3, 4, 5]);
        assert_eq!(numbers(&node), vec![5, 4, 3]);
        assert_eq!(node.to_string(), "[5, 4, 3]");
    }

    #[test]
    fn cons_shares_the_tail() {
        let tail = chain(&[1, 2]);
        let a = tail.cons(10);
        let b = tail.cons(20);
        assert_eq!(numbers(&a), vec![10, 2, 1]);
        assert_eq!(numbers(&b), vec![20, 2, 1]);
        assert_eq!(numbers(&tail), vec![2, 1]);
    }

    #[test]
    fn value_is_idempotent() {
        let node = chain(&[7]);
        assert_eq!(node.value().unwrap(), node.value().unwrap());
        assert!(node.next().unwrap().is_none());
    }
}
