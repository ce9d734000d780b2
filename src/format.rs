use crate::errors::GenError;
use crate::table::TableEntry;
use std::io::Write;

/// Writes a single `lookupTable[uint256(<value>)] = <exponent>;` line.
pub fn write_entry(output: &mut dyn Write, entry: &TableEntry) -> anyhow::Result<()> {
    writeln!(
        output,
        "lookupTable[uint256({})] = {};",
        entry.value, entry.exponent
    )?;
    Ok(())
}

/// Writes every entry in the order given and returns the number of lines written.
pub fn write_table<I>(output: &mut dyn Write, entries: I) -> anyhow::Result<usize>
where
    I: IntoIterator<Item = Result<TableEntry, GenError>>,
{
    let mut lines = 0;
    for entry in entries {
        let entry = entry?;
        write_entry(output, &entry)?;
        lines += 1;
    }
    Ok(lines)
}
