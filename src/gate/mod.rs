//! Access Gate Module
//!
//! Pluggable permission policies checked by the proxy before any cache or
//! subject work happens. A denial is an ordinary `false`, never an error:
//! policies decide, the proxy reports.

use std::collections::HashSet;

// == Access Gate Trait ==
/// Decides whether a request is permitted.
///
/// Implementations must be side-effect free; the proxy may consult the gate
/// any number of times for the same input.
pub trait AccessGate {
    /// Returns true if the given request input may be served.
    fn allow(&self, input: &str) -> bool;
}

/// Any `Fn(&str) -> bool` is a gate, so policies can be supplied as closures.
impl<F> AccessGate for F
where
    F: Fn(&str) -> bool,
{
    fn allow(&self, input: &str) -> bool {
        self(input)
    }
}

/// Boxed gates delegate to their inner policy, so handler state can hold a
/// runtime-chosen policy.
impl AccessGate for Box<dyn AccessGate + Send + Sync> {
    fn allow(&self, input: &str) -> bool {
        self.as_ref().allow(input)
    }
}

// == Allow All ==
/// The reference policy: permits every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessGate for AllowAll {
    fn allow(&self, _input: &str) -> bool {
        true
    }
}

// == Deny List ==
/// Rejects requests whose input appears on a fixed list.
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    blocked: HashSet<String>,
}

impl DenyList {
    /// Builds a deny list from the given inputs.
    pub fn new<I, S>(blocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocked: blocked.into_iter().map(Into::into).collect(),
        }
    }
}

impl AccessGate for DenyList {
    fn allow(&self, input: &str) -> bool {
        !self.blocked.contains(input)
    }
}
