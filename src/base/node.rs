use crate::base::*;
use crate::nodes::{Concrete, Filtered, Mapped, Merged, While};
use dyn_clone::DynClone;
use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// A transform callable, mapping one payload to another.
pub type Transform = Rc<dyn Fn(&Value) -> Result<Value, BaseError>>;

/// A predicate callable, deciding membership of a payload.
pub type Predicate = Rc<dyn Fn(&Value) -> Result<bool, BaseError>>;

/// A producer callable, yielding the payload of a generator node.
pub type Producer = Rc<dyn Fn() -> Value>;

/// A continuation callable, yielding the successor of a generator node.
pub type Continuation = Rc<dyn Fn() -> Option<NodeRef>>;

/// The common trait of all node variants: one position in a sequence, exposing a payload and a
/// possibly-absent successor. A node is immutable once observed: `value()` called twice returns
/// equal results, and `next()` called twice returns structurally equivalent nodes, though adapter
/// variants may allocate a fresh wrapper on each call.
///
/// Everything beyond these two primitive operations, i.e. the whole operator set, is implemented
/// once on [`NodeRef`] and shared by every variant.
pub trait Node: DynClone {
    /// The payload at this position. Adapter variants compute it on demand from their support
    /// node, so a failing callable surfaces here.
    fn value(&self) -> Result<Value, SeqError>;

    /// The following node, or `None` if this is the last position.
    fn next(&self) -> Result<Option<NodeRef>, SeqError>;
}

dyn_clone::clone_trait_object!(Node);


/// A shared handle to a node. Cloning is O(1) and handles may reference the same node from
/// multiple sequence heads simultaneously: prepending via [`cons`](NodeRef::cons) creates a new
/// head whose tail is the original node, which remains valid and usable independently.
#[derive(Clone)]
pub struct NodeRef(Rc<dyn Node>);

impl NodeRef {
    pub fn new(node: impl Node + 'static) -> NodeRef {
        NodeRef(Rc::new(node))
    }

    pub fn value(&self) -> Result<Value, SeqError> {
        self.0.value()
    }

    pub fn next(&self) -> Result<Option<NodeRef>, SeqError> {
        self.0.next()
    }

    /// Prepends `value`, returning a new head sharing this node as its tail. O(1),
    /// non-destructive.
    pub fn cons(&self, value: impl Into<Value>) -> NodeRef {
        Concrete::new(value.into(), Some(self.clone()))
    }

    /// A lazy view applying `f` to every value of this sequence. `f` must be a pure function;
    /// a failure inside it propagates as a failure of the whole traversal.
    pub fn map(&self, f: impl Fn(&Value) -> Result<Value, BaseError> + 'static) -> NodeRef {
        Mapped::new(self.clone(), Rc::new(f))
    }

    /// Scans forward for the first value satisfying `p` and returns a lazy view producing only
    /// satisfying values, or `None` if the chain is exhausted without a match. Scanning is
    /// forward-only and never revisits prior positions.
    pub fn filter(&self, p: impl Fn(&Value) -> Result<bool, BaseError> + 'static)
        -> Result<Option<NodeRef>, SeqError>
    {
        Filtered::scan(self.clone(), Rc::new(p))
    }

    /// The longest prefix of values satisfying `p`, stopping at the first failure. If this
    /// node's own value already fails, the result is `None`. Unlike [`filter`](NodeRef::filter)
    /// this never skips values.
    pub fn take_while(&self, p: impl Fn(&Value) -> Result<bool, BaseError> + 'static)
        -> Result<Option<NodeRef>, SeqError>
    {
        While::guard(self.clone(), Rc::new(p))
    }

    /// Concatenates `second` after this sequence. On the transition between the two the merged
    /// view advances the second side without yielding its head, so the second sequence
    /// contributes all values except its first.
    pub fn merge(&self, second: Option<NodeRef>) -> NodeRef {
        Merged::new(Some(self.clone()), second)
    }

    /// An iterator over the values of this chain, in order. Each step evaluates one position;
    /// an error ends the iteration after being reported once.
    pub fn values(&self) -> Values {
        Values{state: State::Node(self.clone())}
    }

    /// Invokes `f` on every value in order, exactly once per position, and returns the original
    /// head. Never terminates on an unbounded sequence: bound it with
    /// [`take_while`](NodeRef::take_while) first, or rely on [`stop`](crate::base::stop).
    pub fn for_each(&self, mut f: impl FnMut(&Value)) -> Result<NodeRef, SeqError> {
        for value in self.values() {
            f(&value?);
        }
        Ok(self.clone())
    }

    /// Combines all values left to right into `init`. Never terminates on an unbounded
    /// sequence; see [`for_each`](NodeRef::for_each).
    pub fn fold(&self, init: impl Into<Value>,
        f: impl Fn(Value, &Value) -> Result<Value, BaseError>) -> Result<Value, SeqError>
    {
        let mut acc = init.into();
        for value in self.values() {
            let value = value?;
            acc = try_with!(&value, f(acc, &value)?);
        }
        Ok(acc)
    }

    /// Like [`fold`](NodeRef::fold), but seeds the accumulator from the head value and combines
    /// from the second position onward. A one-position sequence returns its value unchanged
    /// without invoking `f`.
    pub fn reduce(&self, f: impl Fn(Value, &Value) -> Result<Value, BaseError>)
        -> Result<Value, SeqError>
    {
        let mut iter = self.values();
        let Some(first) = iter.next() else {
            unreachable!("a node chain yields at least one value")
        };
        let mut acc = first?;
        for value in iter {
            let value = value?;
            acc = try_with!(&value, f(acc, &value)?);
        }
        Ok(acc)
    }

    /// Write the values of the chain in a human-readable form. This is called by the [`Display`]
    /// trait. The formatter may specify a maximum width (using the `"{:.n}"` syntax), in which
    /// case the output is truncated using ellipsis (the width must be at least 4 to accommodate
    /// the string `"[..."`); if no width is given, the first three values are written out. If an
    /// error happens during reading the chain, it is represented as `"<!>"`.
    pub(crate) fn writeout(&self, f: &mut Formatter<'_>, error: &Cell<Option<SeqError>>)
        -> std::fmt::Result
    {
        // The default character budget also bounds nested sequence payloads, which inherit
        // whatever remains of it.
        let mut iter = self.values();
        let (prec, max) = match f.precision() {
            Some(prec) => (std::cmp::max(prec, 4), usize::MAX),
            None => (80, 3)
        };
        let mut s = String::new();
        let mut i = 0;
        s.push('[');
        'a: {
            while s.len() < prec && i < max {
                match iter.next() {
                    None => {
                        s.push(']');
                        break 'a;
                    },
                    Some(Ok(value)) => {
                        let plen = s.len();
                        if i > 0 {
                            s += ", ";
                        }
                        let (string, err) = value.format(prec - plen);
                        s += &string;
                        if err.is_some() {
                            error.set(err);
                            break 'a;
                        }
                    },
                    Some(Err(err)) => {
                        if i > 0 {
                            s += ", ";
                        }
                        s += "<!>";
                        error.set(Some(err));
                        break 'a;
                    }
                }
                i += 1;
            }
            s += match iter.next() {
                None => "]",
                Some(_) => ", ...]"
            };
        }
        if s.len() < prec {
            write!(f, "{s}")
        } else {
            write!(f, "{:.*}...", prec - 3, s)
        }
    }
}

impl Node for NodeRef {
    fn value(&self) -> Result<Value, SeqError> {
        self.0.value()
    }

    fn next(&self) -> Result<Option<NodeRef>, SeqError> {
        self.0.next()
    }
}

impl From<Box<dyn Node>> for NodeRef {
    fn from(node: Box<dyn Node>) -> NodeRef {
        NodeRef(Rc::from(node))
    }
}

impl Display for NodeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.writeout(f, &Default::default())
    }
}

impl std::fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.writeout(f, &Default::default())
    }
}


/// The iterator returned by [`NodeRef::values()`]. Every call to `next` returns either:
/// - `Some(Ok(value))`: the payload at the next position,
/// - `Some(Err(err))`: an error occurred computing a payload or successor,
/// - `None`: the chain ended.
///
/// A successor error is reported at the position it belongs to: the value before it is still
/// yielded first. After an error the iterator is exhausted.
pub struct Values {
    state: State
}

enum State {
    Node(NodeRef),
    Failed(SeqError),
    Done
}

impl Iterator for Values {
    type Item = Result<Value, SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        check_stop!(iter);
        match std::mem::replace(&mut self.state, State::Done) {
            State::Node(node) => {
                let value = match node.value() {
                    Ok(value) => value,
                    Err(err) => return Some(Err(err))
                };
                match node.next() {
                    Ok(Some(next)) => self.state = State::Node(next),
                    Ok(None) => (),
                    Err(err) => self.state = State::Failed(err)
                }
                Some(Ok(value))
            },
            State::Failed(err) => Some(Err(err)),
            State::Done => None
        }
    }
}
