//! The `demo` command - exercise every array operation and narrate the results.

use std::io::Write;

use dynarray::{DynamicArray, ExecError, Session, script};

use crate::cli::DemoArgs;
use crate::common::{CliError, CliResult};

// The core API takes `usize`, so a negative index can only come from a script.
const NEGATIVE_ACCESS: &str = "get -1";

/// Run the demo command.
pub fn run(args: DemoArgs) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    write_transcript(&mut stdout, args.size)
}

/// Write the demo transcript for an array created with `size` elements.
///
/// The two deliberately invalid accesses near the end are reported inline,
/// the way a caller would handle them.
pub fn write_transcript(out: &mut dyn Write, size: usize) -> CliResult<()> {
    let mut v = DynamicArray::new(size);
    writeln!(out, "Initial array (size {}): {v}", v.len())?;

    v.push_back(10);
    v.push_back(20);
    v.push_back(30);
    writeln!(out, "After adding elements (10, 20, 30): {v}")?;

    writeln!(out, "First element (front): {}", v.front()?)?;
    writeln!(out, "Last element (back): {}", v.back()?)?;
    v.set(0, 99)?;
    writeln!(out, "After setting the first element to 99: {v}")?;

    v.insert(2, 50)?;
    writeln!(out, "After inserting 50 at index 2: {v}")?;

    match v.find(20) {
        Some(index) => writeln!(out, "Element 20 found at index: {index}")?,
        None => writeln!(out, "Element 20 not found")?,
    }

    v.right_rotate_one();
    writeln!(out, "After right rotation by 1: {v}")?;

    v.right_rotate(3);
    writeln!(out, "After right rotation by 3: {v}")?;

    v.left_rotate_one();
    writeln!(out, "After left rotation by 1: {v}")?;

    let removed = v.pop(2)?;
    writeln!(out, "After removing element at index 2 (removed: {removed}): {v}")?;

    match v.find_with_transposition(30) {
        Some(index) => writeln!(
            out,
            "Element 30 found and moved closer to the front. New index: {index}"
        )?,
        None => writeln!(out, "Element 30 not found")?,
    }
    writeln!(out, "After find with transposition: {v}")?;

    let access = script::parse(NEGATIVE_ACCESS)
        .map_err(|e| CliError::from_script(e, NEGATIVE_ACCESS, None))?;
    write!(out, "Accessing element at invalid index (-1): ")?;
    match Session::from(v.clone()).execute(&access, out) {
        Ok(()) => {}
        Err(ExecError::Script(e)) => writeln!(out, "Caught error: {e}")?,
        Err(e) => return Err(CliError::from_exec(e, NEGATIVE_ACCESS, None)),
    }

    write!(out, "Popping element at invalid index (100): ")?;
    match v.pop(100) {
        Ok(value) => writeln!(out, "{value}")?,
        Err(e) => writeln!(out, "Caught error: {e}")?,
    }

    let mut copy = v.clone();
    copy.set(0, -1)?;
    writeln!(out, "Copy after setting its first element to -1: {copy}")?;
    writeln!(out, "Original is unchanged: {v}")?;

    copy.destroy();
    writeln!(
        out,
        "Copy after destroy: length {}, capacity {}",
        copy.len(),
        copy.capacity()
    )?;

    writeln!(out, "Final state of the array: {v}")?;
    Ok(())
}
