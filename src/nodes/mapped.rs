use crate::base::*;

/// A lazy view applying a transform to every value of a support node. The support sequence is
/// never copied or mutated; each `next()` wraps the support's successor under the same
/// transform.
#[derive(Clone)]
pub struct Mapped {
    source: NodeRef,
    transform: Transform
}

impl Mapped {
    pub(crate) fn new(source: NodeRef, transform: Transform) -> NodeRef {
        NodeRef::new(Mapped{source, transform})
    }
}

impl Node for Mapped {
    fn value(&self) -> Result<Value, SeqError> {
        let value = self.source.value()?;
        Ok(try_with!(&value, (self.transform)(&value)?))
    }

    fn next(&self) -> Result<Option<NodeRef>, SeqError> {
        Ok(self.source.next()?
            .map(|next| Mapped::new(next, self.transform.clone())))
    }
}

#[cfg(test)]
mod tests {
    use crate::base::*;
    use crate::testutils::*;

    #[test]
    fn map_homomorphism_at_every_position() {
        let node = chain(&[1, 2, 3]);
        let mapped = node.map(plus(1));
        let mut pair = (Some(node), Some(mapped));
        loop {
            match pair {
                (Some(orig), Some(image)) => {
                    let expected = plus(1)(&orig.value().unwrap()).unwrap();
                    assert_eq!(image.value().unwrap(), expected);
                    pair = (orig.next().unwrap(), image.next().unwrap());
                },
                (None, None) => break,
                _ => panic!("mapped view changed the sequence length")
            }
        }
    }

    #[test]
    fn map_keeps_unbounded_sequences_lazy() {
        let doubled = crate::nodes::integers_from(0)
            .map(|value| Ok(Value::Number(value.as_num()? * 2)));
        assert_eq!(doubled.to_string(), "[0, 2, 4, ...]");
    }

    #[test]
    fn transform_failure_blames_the_payload() {
        let node = chain(&[1]).cons(true).map(plus(1));
        match node.value() {
            Err(SeqError::ValueError { value, .. }) => assert_eq!(value, Value::from(true)),
            other => panic!("expected a value error, got {other:?}")
        }
    }
}
