use crate::base::*;
use std::fmt::{Display, Formatter};

/// The base error returned by helper functions and user-supplied callables. In most situations
/// this is intended to be turned into [`SeqError`] by supplementing the [`Value`] whose
/// processing failed.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub enum BaseError {
    String(String),
    Seq(Box<SeqError>)
}

impl From<String> for BaseError {
    fn from(string: String) -> BaseError {
        BaseError::String(string)
    }
}

impl From<&str> for BaseError {
    fn from(string: &str) -> BaseError {
        BaseError::String(string.to_string())
    }
}

impl From<SeqError> for BaseError {
    fn from(err: SeqError) -> BaseError {
        BaseError::Seq(Box::new(err))
    }
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Seq(s) => write!(f, "{s}")
        }
    }
}


/// The runtime error type with an indication of the [`Value`] whose processing caused it.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub enum SeqError {
    ValueError { reason: String, value: Value },
    Interrupt
}

impl SeqError {
    pub fn new(base: impl Into<BaseError>, value: impl Into<Value>) -> SeqError {
        match base.into() {
            BaseError::String(reason) => SeqError::ValueError{reason, value: value.into()},
            BaseError::Seq(err) => *err
        }
    }
}

impl std::error::Error for SeqError { }

impl Display for SeqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValueError { reason, value } => write!(f, "{value:?}: {reason}"),
            Self::Interrupt => write!(f, "interrupted")
        }
    }
}

macro_rules! try_with {
    ($blame:expr, $expr:expr) => {
        match (|| -> Result<_, BaseError> { Ok($expr) })() {
            Ok(result) => result,
            Err(err) => return Err(SeqError::new(err, $blame))
        }
    }
}

macro_rules! check_stop {
    () => {
        if stop::should_stop() {
            Err(SeqError::Interrupt)?;
        }
    };
    (iter) => {
        if stop::should_stop() {
            return Some(Err(SeqError::Interrupt));
        }
    }
}

pub(crate) use try_with;
pub(crate) use check_stop;
