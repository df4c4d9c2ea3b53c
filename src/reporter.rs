use std::io::Write;

use crate::models::Person;

pub fn report<W: Write>(writer: &mut W, grandfathers: &[&Person]) -> std::io::Result<()> {
    writeln!(writer, "Found {} matching grandfathers:", grandfathers.len())?;
    for grandfather in grandfathers {
        writeln!(writer, "- {} {}", grandfather.name, grandfather.surname)?;
    }

    writer.flush()
}
