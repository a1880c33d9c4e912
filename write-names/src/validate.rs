//! The pre-compilation validation pass

use std::fmt::{Debug, Display};

/// Pre-compilation validation of tables.
///
/// Some requirements on a table are awkward to encode in the type system,
/// such as requiring two arrays to have equal lengths, or a computed offset
/// to fit in a `uint16`. These requirements are enforced via a validation
/// pass.
pub trait Validate {
    /// Ensure that this table is well-formed, reporting any errors.
    ///
    /// This calls [validate_impl][Self::validate_impl] and collects any
    /// errors.
    fn validate(&self) -> Result<(), ValidationReport> {
        let mut ctx = ValidationCtx::default();
        self.validate_impl(&mut ctx);
        if ctx.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport { errors: ctx.errors })
        }
    }

    /// Validate this table.
    ///
    /// An implementation should look something like:
    ///
    /// ```rust
    /// # use write_names::validate::{Validate, ValidationCtx};
    /// struct MyRecord {
    ///     my_values: Vec<u16>,
    /// }
    ///
    /// impl Validate for MyRecord {
    ///     fn validate_impl(&self, ctx: &mut ValidationCtx) {
    ///         ctx.in_table("MyRecord", |ctx| {
    ///             ctx.in_field("my_values", |ctx| {
    ///                 if self.my_values.len() > (u16::MAX as usize) {
    ///                     ctx.report("array is too long");
    ///                 }
    ///             })
    ///         })
    ///     }
    /// }
    /// ```
    fn validate_impl(&self, ctx: &mut ValidationCtx);
}

/// A context for collecting validation errors.
///
/// This is responsible for tracking the position in the table at which
/// a given error is reported.
///
/// ## paths/locations
///
/// As validation travels down through a table, the path is recorded via
/// appropriate calls to methods like [in_table][Self::in_table] and
/// [in_field][Self::in_field].
#[derive(Clone, Debug, Default)]
pub struct ValidationCtx {
    cur_location: Vec<LocationElem>,
    errors: Vec<ValidationError>,
}

#[derive(Debug, Clone)]
struct ValidationError {
    error: String,
    location: Vec<LocationElem>,
}

/// One or more validation errors.
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

#[derive(Debug, Clone)]
enum LocationElem {
    Table(&'static str),
    Field(&'static str),
    Index(usize),
}

impl ValidationCtx {
    /// Run the provided closure in the context of a new table.
    ///
    /// Errors reported in the closure will include the provided identifer
    /// in their path.
    pub fn in_table(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx)) {
        self.with_elem(LocationElem::Table(name), f);
    }

    /// Run the provided closure in the context of a new field.
    ///
    /// Errors reported in the closure will be associated with the field.
    pub fn in_field(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx)) {
        self.with_elem(LocationElem::Field(name), f);
    }

    /// Run the provided closure in the context of an array.
    pub fn in_array(&mut self, f: impl FnOnce(&mut ValidationCtx)) {
        self.with_elem(LocationElem::Index(0), f);
    }

    /// Run the provided closure in the context of a new array item.
    ///
    /// This should only be called in a closure passed to
    /// [in_array][Self::in_array]; elsewhere the item is not indexed.
    pub fn array_item(&mut self, f: impl FnOnce(&mut ValidationCtx)) {
        f(self);
        if let Some(LocationElem::Index(i)) = self.cur_location.last_mut() {
            *i += 1;
        }
    }

    /// Report a new error, associating it with the current path.
    pub fn report(&mut self, msg: impl Display) {
        self.errors.push(ValidationError {
            location: self.cur_location.clone(),
            error: msg.to_string(),
        });
    }

    fn with_elem(&mut self, elem: LocationElem, f: impl FnOnce(&mut ValidationCtx)) {
        self.cur_location.push(elem);
        f(self);
        self.cur_location.pop();
    }
}

impl ValidationReport {
    /// The number of errors in this report.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The messages of each error, without location information.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.errors.iter().map(|error| error.error.as_str())
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let [error] = self.errors.as_slice() {
            return writeln!(f, "Validation error:\n{error}");
        }

        writeln!(f, "{} validation errors:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "#{}\n{error}", i + 1)?;
        }
        Ok(())
    }
}

impl Debug for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\"{}\"", self.error)?;
        let mut indent = 0;
        for (i, elem) in self.location.iter().enumerate() {
            match elem {
                LocationElem::Table(name) if i == 0 => write!(f, "in: {name}"),
                LocationElem::Table(name) => {
                    indent += 1;
                    write!(f, "\n{:width$}{name}", "", width = indent * 2)
                }
                LocationElem::Field(name) => write!(f, ".{name}"),
                LocationElem::Index(idx) => write!(f, "[{idx}]"),
            }?;
        }
        writeln!(f)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_array(|ctx| {
            for item in self.iter() {
                ctx.array_item(|ctx| {
                    item.validate_impl(ctx);
                })
            }
        });
    }
}
