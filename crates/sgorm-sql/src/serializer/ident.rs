use super::{Formatter, Params, ToSql};

/// A table, column, or index name.
///
/// Names are written bare. Models are linted for valid identifiers, and every
/// value reaches the database as a parameter, so nothing user-supplied is
/// spliced in here.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self.0.as_ref());
    }
}
