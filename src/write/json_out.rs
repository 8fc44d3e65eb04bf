//! JSON writer

use std::io::Write;

use crate::catalog::Approach;

use super::errors::WriteResult;
use super::record::ApproachRecord;

/// Writes results as a JSON array, returning the number of elements.
///
/// Elements are serialized one at a time as the stream is pulled.
/// An absent name is `""` and an unknown diameter is `null`.
pub fn write_to_json<'a, I, W>(results: I, mut out: W) -> WriteResult<usize>
where
    I: IntoIterator<Item = Approach<'a>>,
    W: Write,
{
    out.write_all(b"[")?;

    let mut rows = 0;
    for approach in results {
        if rows > 0 {
            out.write_all(b",")?;
        }
        out.write_all(b"\n  ")?;
        serde_json::to_writer(&mut out, &ApproachRecord::from_approach(&approach))?;
        rows += 1;
    }

    if rows > 0 {
        out.write_all(b"\n")?;
    }
    out.write_all(b"]\n")?;
    out.flush()?;
    Ok(rows)
}
