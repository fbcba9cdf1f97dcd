//! Subject Module
//!
//! The computation the proxy stands in front of. Stateless and infallible:
//! the proxy assumes `compute` always produces a result.

// == Compute Trait ==
/// The expensive operation guarded by the proxy.
pub trait Compute {
    /// Produces the result for the given request input.
    fn compute(&self, input: &str) -> String;
}

/// Any `Fn(&str) -> String` is a subject, so computations can be supplied
/// as closures.
impl<F> Compute for F
where
    F: Fn(&str) -> String,
{
    fn compute(&self, input: &str) -> String {
        self(input)
    }
}

/// Boxed subjects delegate to their inner computation.
impl Compute for Box<dyn Compute + Send + Sync> {
    fn compute(&self, input: &str) -> String {
        self.as_ref().compute(input)
    }
}

// == Echo Subject ==
/// Reference subject: echoes the input back with a `computed:` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoSubject;

impl Compute for EchoSubject {
    fn compute(&self, input: &str) -> String {
        format!("computed:{}", input)
    }
}


// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::testing::CountingSubject;
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_echo_subject() {
        let subject = EchoSubject;
        assert_eq!(subject.compute("Request 1"), "computed:Request 1");
    }

    #[test]
    fn test_echo_subject_empty_input() {
        let subject = EchoSubject;
        assert_eq!(subject.compute(""), "computed:");
    }

    #[test]
    fn test_closure_as_subject() {
        let subject = |input: &str| input.to_uppercase();
        assert_eq!(subject.compute("abc"), "ABC");
    }

    #[test]
    fn test_counting_subject_tracks_calls() {
        let subject = CountingSubject::new(EchoSubject);
        let counter = subject.counter();

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        subject.compute("a");
        subject.compute("b");
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
