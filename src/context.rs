//! The execution context: a stack of key/value frames.
//!
//! Every templated command resolves against the *current* context frame: a
//! mapping from names like `session_name` or `virtualenv_path` to values.
//! The base frame is built once at startup from flags and environment
//! variables; project configuration is layered on top as a scoped overlay
//! via [`ContextStack::scoped`], which restores the previous frame on every
//! exit path, including propagated errors.
//!
//! The stack is a plain value threaded through calls by reference. There is
//! no global state and no interior mutability.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, TentError};

/// A value stored in the context.
///
/// Mappings and sequences carry structured project data (the environment
/// variable map and the window list); strings and bools carry everything
/// else.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Shorthand for a string value.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    /// The string form used for template substitution.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Map(entries) => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                Ok(())
            }
        }
    }
}

/// A set of named values: a context overlay, or call-site extra bindings
/// for template resolution.
pub type Bindings = BTreeMap<String, Value>;

/// Convenience constructor for a one-entry binding set.
pub fn binding(key: &str, value: impl Into<Value>) -> Bindings {
    let mut bindings = Bindings::new();
    bindings.insert(key.to_string(), value.into());
    bindings
}

/// The stack of context frames. The top frame is the current context.
///
/// # Example
///
/// ```
/// use tent::context::{binding, ContextStack};
///
/// let mut ctx = ContextStack::new(binding("greeting", "hello"));
/// ctx.scoped(binding("greeting", "hi"), |ctx| {
///     assert_eq!(ctx.get_str("greeting")?, "hi");
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(ctx.get_str("greeting").unwrap(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct ContextStack {
    frames: Vec<Bindings>,
}

impl ContextStack {
    /// Create a stack whose base frame holds the given bindings.
    pub fn new(base: Bindings) -> Self {
        Self { frames: vec![base] }
    }

    fn current(&self) -> &Bindings {
        // frames is non-empty by construction: new() seeds one frame and
        // scoped() pops only what it pushed.
        self.frames.last().expect("context stack has a base frame")
    }

    /// Look up a value in the current frame.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.current().get(key)
    }

    /// Whether the current frame binds `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.current().contains_key(key)
    }

    /// Number of overlays currently in effect above the base frame.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Look up a string value.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        match self.require(key)? {
            Value::Str(s) => Ok(s),
            _ => Err(TentError::ContextType {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    /// Look up a boolean value.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        match self.require(key)? {
            Value::Bool(b) => Ok(*b),
            _ => Err(TentError::ContextType {
                key: key.to_string(),
                expected: "boolean",
            }),
        }
    }

    /// Look up a sequence value.
    pub fn get_seq(&self, key: &str) -> Result<&[Value]> {
        match self.require(key)? {
            Value::Seq(items) => Ok(items),
            _ => Err(TentError::ContextType {
                key: key.to_string(),
                expected: "sequence",
            }),
        }
    }

    /// Look up a mapping value.
    pub fn get_map(&self, key: &str) -> Result<&BTreeMap<String, Value>> {
        match self.require(key)? {
            Value::Map(entries) => Ok(entries),
            _ => Err(TentError::ContextType {
                key: key.to_string(),
                expected: "mapping",
            }),
        }
    }

    fn require(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| TentError::MissingBinding {
            name: key.to_string(),
        })
    }

    /// Run `f` with `overlay` merged onto the current frame.
    ///
    /// The merged frame is current for the duration of `f` only; the
    /// previous frame is reinstalled before this method returns, whether
    /// `f` succeeds or fails. Overlay entries win on key collision, and the
    /// underlying frame is never mutated. Nested calls compose additively
    /// and unwind last-in-first-out.
    pub fn scoped<T>(
        &mut self,
        overlay: Bindings,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let mut frame = self.current().clone();
        frame.extend(overlay);
        self.frames.push(frame);
        tracing::debug!(depth = self.depth(), "entered context overlay");
        let result = f(self);
        self.frames.pop();
        tracing::debug!(depth = self.depth(), "restored previous context");
        result
    }
}
