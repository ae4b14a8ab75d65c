//! Signature parsing from declared form
//!
//! Rust functions do not expose parameter names at runtime, so the
//! caller supplies the declared form explicitly: either a literal
//! declaration string (`"fn greet(name, $greeter)"`) or an ordered name
//! list. Parsing happens once, at bind time; the resulting [`Signature`]
//! is immutable.

use crate::constants::DEFAULT_SIGIL;
use crate::error::{Error, Result};
use crate::value_objects::param::ParamSlot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration parsing configuration
///
/// The sigil defaults to `$`; override it when the declaration syntax
/// being mirrored reserves a different marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Character that marks a parameter as registry-resolved
    pub sigil: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            sigil: DEFAULT_SIGIL,
        }
    }
}

impl ParseOptions {
    /// Options with the default sigil
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with a custom sigil
    pub fn with_sigil(sigil: char) -> Self {
        Self { sigil }
    }
}

/// Value Object: Ordered parameter slots of one declaration
///
/// ## Example
///
/// ```rust
/// use mdi_domain::value_objects::{ParamSlot, Signature};
///
/// let signature = Signature::parse("fn greet(name, $greeter)").unwrap();
/// assert_eq!(signature.len(), 2);
/// assert_eq!(signature.slots()[1], ParamSlot::Injected("greeter".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    slots: Vec<ParamSlot>,
}

impl Signature {
    /// Build a signature from already-classified slots
    pub fn new(slots: Vec<ParamSlot>) -> Self {
        Self { slots }
    }

    /// The zero-parameter signature
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a literal declaration using the default options
    pub fn parse(decl: &str) -> Result<Self> {
        Self::parse_with(decl, &ParseOptions::default())
    }

    /// Parse a literal declaration
    ///
    /// All whitespace is stripped, then the first parenthesized group is
    /// taken as the parameter list and split on commas. `"fn f()"`
    /// yields the empty signature. A declaration with no parameter list
    /// at all cannot be bound and is rejected.
    pub fn parse_with(decl: &str, options: &ParseOptions) -> Result<Self> {
        let flat: String = decl.chars().filter(|c| !c.is_whitespace()).collect();
        let open = flat.find('(').ok_or_else(|| {
            Error::signature(format!("no parameter list in declaration `{decl}`"))
        })?;
        let body = &flat[open + 1..];
        let close = body.find(')').ok_or_else(|| {
            Error::signature(format!("unterminated parameter list in declaration `{decl}`"))
        })?;
        let inner = &body[..close];
        if inner.is_empty() {
            return Ok(Self::empty());
        }
        let slots = inner
            .split(',')
            .map(|token| ParamSlot::parse_with(token, options.sigil))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(slots))
    }

    /// Build a signature from an ordered list of declared names
    ///
    /// Each name is classified exactly as it would be inside a
    /// declaration string: `"$greeter"` becomes an injected slot,
    /// `"name"` a positional one.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slots = names
            .into_iter()
            .map(|name| ParamSlot::parse(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(slots))
    }

    /// The ordered slots
    pub fn slots(&self) -> &[ParamSlot] {
        &self.slots
    }

    /// Number of declared parameters
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the declaration takes no parameters
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate the slots in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, ParamSlot> {
        self.slots.iter()
    }
}

impl fmt::Display for Signature {
    /// Renders the declared parameter list, e.g. `(name, $greeter)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{slot}")?;
        }
        write!(f, ")")
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a ParamSlot;
    type IntoIter = std::slice::Iter<'a, ParamSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
