use crate::base::*;
use std::cell::Cell;
use std::fmt::{Debug, Display, Formatter};

/// A `Value` is the dynamically-typed payload carried at one position of a sequence. Payloads are
/// never checked up front: a callable receiving a kind it cannot interpret fails at the point of
/// use through the [`as_num`](Value::as_num)-family accessors.
#[derive(Clone)]
pub enum Value {
    Number(Number),
    Bool(bool),
    Str(String),
    Seq(Box<dyn Node>)
}

impl Value {
    pub fn new_number(value: impl Into<Number>) -> Value {
        Value::Number(value.into())
    }

    pub fn new_bool(value: bool) -> Value {
        Value::Bool(value)
    }

    pub fn new_str(value: impl Into<String>) -> Value {
        Value::Str(value.into())
    }

    pub fn new_seq(value: impl Node + 'static) -> Value {
        Value::Seq(Box::new(value))
    }

    pub fn as_num(&self) -> Result<&Number, BaseError> {
        match self {
            Value::Number(x) => Ok(x),
            _ => Err(format!("expected number, found {:?}", &self).into())
        }
    }

    pub fn as_bool(&self) -> Result<bool, BaseError> {
        match self {
            Value::Bool(x) => Ok(*x),
            _ => Err(format!("expected bool, found {:?}", &self).into())
        }
    }

    pub fn as_str(&self) -> Result<&str, BaseError> {
        match self {
            Value::Str(s) => Ok(s),
            _ => Err(format!("expected string, found {:?}", &self).into())
        }
    }

    pub fn as_seq(&self) -> Result<&dyn Node, BaseError> {
        match self {
            Value::Seq(s) => Ok(&**s),
            _ => Err(format!("expected sequence, found {:?}", &self).into())
        }
    }

    /// An owned handle to a sequence payload.
    pub fn to_seq(&self) -> Result<NodeRef, BaseError> {
        match self {
            Value::Seq(s) => Ok(NodeRef::from(dyn_clone::clone_box(&**s))),
            _ => Err(format!("expected sequence, found {:?}", &self).into())
        }
    }

    /// Renders this value into a string of at most `max_len` characters. An error encountered
    /// while reading a sequence payload is marked `<!>` in the output and handed back alongside
    /// the rendered prefix.
    pub fn format(&self, max_len: usize) -> (String, Option<SeqError>) {
        struct Stateful<'item> {
            item: &'item Value,
            cell: Cell<Option<SeqError>>
        }

        impl Display for Stateful<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                self.item.format_int(f, &self.cell)
            }
        }

        let s = Stateful{item: self, cell: Default::default()};
        let result = format!("{:.*}", max_len, s);
        (result, s.cell.take())
    }

    pub(crate) fn format_int(&self, f: &mut Formatter<'_>, error: &Cell<Option<SeqError>>)
        -> std::fmt::Result
    {
        use Value::*;
        match self {
            Number(n) => write!(f, "{n}"),
            Bool(b) => write!(f, "{b}"),
            Str(s) => write!(f, "{s:?}"),
            Seq(s) => NodeRef::from(dyn_clone::clone_box(&**s)).writeout(f, error)
        }
    }

    pub(crate) fn type_str(&self) -> &'static str {
        use Value::*;
        match self {
            Number(_) => "number",
            Bool(_) => "bool",
            Str(_) => "string",
            Seq(_) => "sequence"
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.format_int(f, &Default::default())
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.type_str())?;
        self.format_int(f, &Default::default())
    }
}

impl PartialEq for Value {
    /// `PartialEq::eq()` must be used with caution because if asked of two infinite sequences it
    /// will never return.
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Number(x1), Number(x2)) => x1 == x2,
            (Bool(x1), Bool(x2)) => x1 == x2,
            (Str(x1), Str(x2)) => x1 == x2,
            (Seq(x1), Seq(x2)) => {
                let mut i1 = NodeRef::from(dyn_clone::clone_box(&**x1)).values();
                let mut i2 = NodeRef::from(dyn_clone::clone_box(&**x2)).values();
                loop {
                    match (i1.next(), i2.next()) {
                        (None, None) => return true,
                        (Some(Ok(v1)), Some(Ok(v2))) if v1 == v2 => continue,
                        _ => return false
                    }
                }
            },
            _ => false
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Value {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Value {
        Value::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Value {
        Value::Number(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::Str(value)
    }
}

impl From<NodeRef> for Value {
    fn from(value: NodeRef) -> Value {
        Value::Seq(Box::new(value))
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Value {
        value.clone()
    }
}
