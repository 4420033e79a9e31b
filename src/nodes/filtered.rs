use crate::base::*;

/// A lazy view over a support node whose value is already known to satisfy the predicate; the
/// value is validated once at construction and not re-checked. Advancing scans forward from the
/// support's successor, skipping failing values, in O(k) for a run of k failures.
#[derive(Clone)]
pub struct Filtered {
    source: NodeRef,
    predicate: Predicate
}

impl Filtered {
    /// Scans forward from `node` for the first value satisfying `predicate`, or `None` if the
    /// chain is exhausted without a match. On a chain with an unbounded run of failing values
    /// this terminates only through [`stop`].
    pub(crate) fn scan(node: NodeRef, predicate: Predicate) -> Result<Option<NodeRef>, SeqError> {
        let mut cur = node;
        loop {
            check_stop!();
            let value = cur.value()?;
            if try_with!(&value, (predicate)(&value)?) {
                return Ok(Some(NodeRef::new(Filtered{source: cur, predicate})));
            }
            match cur.next()? {
                Some(next) => cur = next,
                None => return Ok(None)
            }
        }
    }
}

impl Node for Filtered {
    fn value(&self) -> Result<Value, SeqError> {
        self.source.value()
    }

    fn next(&self) -> Result<Option<NodeRef>, SeqError> {
        match self.source.next()? {
            Some(next) => Filtered::scan(next, self.predicate.clone()),
            None => Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::base::*;
    use crate::testutils::*;

    #[test]
    fn every_produced_value_satisfies() {
        let node = chain(&[1, 2, 3, 4, 5, 6]);
        let even = node.filter(|value| Ok((value.as_num()? % 2i32).is_zero())).unwrap().unwrap();
        assert_eq!(numbers(&even), vec![6, 4, 2]);
        let odd = node.filter(|value| Ok(!(value.as_num()? % 2i32).is_zero())).unwrap().unwrap();
        assert_eq!(numbers(&odd), vec![5, 3, 1]);
    }

    #[test]
    fn no_match_is_absent() {
        let node = chain(&[1, 3, 5]);
        assert!(node.filter(leq(0)).unwrap().is_none());
    }

    #[test]
    fn long_failing_run_is_skipped() {
        let found = crate::nodes::integers_from(0)
            .filter(|value| Ok(value.as_num()? >= &Number::from(1000)))
            .unwrap().unwrap();
        assert_eq!(found.value().unwrap(), Value::from(1000));
        let second = found.next().unwrap().unwrap();
        assert_eq!(second.value().unwrap(), Value::from(1001));
    }

    #[test]
    fn head_value_not_rechecked() {
        use std::cell::Cell;
        use std::rc::Rc;
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let node = chain(&[4]);
        let filtered = node.filter(move |value| {
            counter.set(counter.get() + 1);
            Ok(value.as_num()? <= &Number::from(10))
        }).unwrap().unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(filtered.value().unwrap(), Value::from(4));
        assert_eq!(filtered.value().unwrap(), Value::from(4));
        assert_eq!(calls.get(), 1);
        assert!(filtered.next().unwrap().is_none());
    }

    #[test]
    fn predicate_failure_blames_the_payload() {
        let node = chain(&[1]).cons("oops");
        match node.filter(leq(10)) {
            Err(SeqError::ValueError { value, .. }) => assert_eq!(value, Value::from("oops")),
            other => panic!("expected a value error, got {other:?}")
        }
    }
}
