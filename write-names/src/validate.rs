//! Checks run on a table before it is written

use std::fmt::{self, Display};

/// Checks on a table that the type system doesn't enforce.
///
/// For the naming table these are things like the directory being sorted
/// with no repeated keys, or language ids pointing at language-tag records
/// that exist. [`dump_table`](crate::dump_table) runs this before writing
/// anything.
pub trait Validate {
    /// Run every check, collecting all problems rather than stopping at the
    /// first.
    fn validate(&self) -> Result<(), ValidationReport> {
        let mut ctx = ValidationCtx::default();
        self.validate_impl(&mut ctx);
        if ctx.problems.is_empty() {
            return Ok(());
        }
        Err(ValidationReport {
            problems: ctx.problems,
        })
    }

    /// Report problems with this item to `ctx`.
    ///
    /// Wrap checks in the path methods on [`ValidationCtx`] so that the
    /// report says where each problem was found:
    ///
    /// ```rust
    /// # use write_names::validate::{Validate, ValidationCtx};
    /// struct PostScriptName(String);
    ///
    /// impl Validate for PostScriptName {
    ///     fn validate_impl(&self, ctx: &mut ValidationCtx) {
    ///         ctx.in_table("PostScriptName", |ctx| {
    ///             ctx.in_field("text", |ctx| {
    ///                 if self.0.len() > 63 {
    ///                     ctx.report("longer than 63 characters");
    ///                 }
    ///             })
    ///         })
    ///     }
    /// }
    /// ```
    fn validate_impl(&self, ctx: &mut ValidationCtx);
}

/// Collects problems along with the path to where each was found.
#[derive(Clone, Debug, Default)]
pub struct ValidationCtx {
    path: Vec<Segment>,
    problems: Vec<Problem>,
}

#[derive(Clone, Debug)]
enum Segment {
    Table(&'static str),
    Field(&'static str),
    Index(usize),
}

#[derive(Clone, Debug)]
struct Problem {
    message: String,
    path: Vec<Segment>,
}

/// Everything [`Validate`] found wrong with a table.
pub struct ValidationReport {
    problems: Vec<Problem>,
}

impl ValidationCtx {
    /// Run `f` inside the named table or record.
    pub fn in_table(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx)) {
        self.within(Segment::Table(name), f);
    }

    /// Run `f` for the named field of the current table.
    pub fn in_field(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx)) {
        self.within(Segment::Field(name), f);
    }

    /// Run `f` over an array; call [`array_item`][Self::array_item] once per item.
    pub fn in_array(&mut self, f: impl FnOnce(&mut ValidationCtx)) {
        self.within(Segment::Index(0), f);
    }

    /// Run `f` for the next item of the enclosing array.
    pub fn array_item(&mut self, f: impl FnOnce(&mut ValidationCtx)) {
        debug_assert!(matches!(self.path.last(), Some(Segment::Index(_))));
        f(self);
        if let Some(Segment::Index(i)) = self.path.last_mut() {
            *i += 1;
        }
    }

    /// Record a problem at the current path.
    pub fn report(&mut self, message: impl Display) {
        self.problems.push(Problem {
            message: message.to_string(),
            path: self.path.clone(),
        });
    }

    fn within(&mut self, segment: Segment, f: impl FnOnce(&mut ValidationCtx)) {
        self.path.push(segment);
        f(self);
        self.path.pop();
    }
}

impl ValidationReport {
    /// The number of problems found.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// The message of each problem, without its path.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.problems.iter().map(|problem| problem.message.as_str())
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.path.iter().enumerate() {
            match segment {
                Segment::Table(name) if i == 0 => f.write_str(name),
                Segment::Table(name) => write!(f, ".{name}"),
                Segment::Field(name) => write!(f, ".{name}"),
                Segment::Index(ix) => write!(f, "[{ix}]"),
            }?;
        }
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, ": {}", self.message)
        }
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problems.as_slice() {
            [problem] => write!(f, "Validation failed: {problem}"),
            problems => {
                write!(f, "Validation failed with {} problems:", problems.len())?;
                for problem in problems {
                    write!(f, "\n  {problem}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_array(|ctx| {
            self.iter()
                .for_each(|item| ctx.array_item(|ctx| item.validate_impl(ctx)))
        });
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        if let Some(inner) = self {
            inner.validate_impl(ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(Vec<u16>);

    impl Validate for Pair {
        fn validate_impl(&self, ctx: &mut ValidationCtx) {
            ctx.in_table("Pair", |ctx| {
                ctx.in_field("values", |ctx| {
                    if self.0.len() != 2 {
                        ctx.report(format!("expected 2 values, found {}", self.0.len()));
                    }
                })
            })
        }
    }

    #[test]
    fn report_paths() {
        assert!(Pair(vec![1, 2]).validate().is_ok());
        let report = Pair(vec![1]).validate().unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            ["expected 2 values, found 1"]
        );
        assert_eq!(
            report.to_string(),
            "Validation failed: Pair.values: expected 2 values, found 1"
        );
    }

    #[test]
    fn array_indices() {
        let items = vec![Pair(vec![1, 2]), Pair(vec![]), Pair(vec![3])];
        let report = items.validate().unwrap_err();
        assert_eq!(report.len(), 2);
        let text = report.to_string();
        assert!(text.contains("[1].Pair.values"), "{text}");
        assert!(text.contains("[2].Pair.values"), "{text}");
    }
}
