use std::fmt::{self, Display, Formatter};

use super::types::Message;

/// Echo form: prefix, command, middle and trailing joined by single spaces.
///
/// No terminator is written, this is for logs rather than the wire.
impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let fields = [
            self.prefix(),
            self.command(),
            self.middle(),
            self.trailing(),
        ];

        for (i, field) in fields.into_iter().flatten().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(field)?;
        }

        Ok(())
    }
}
