//! Tool command implementation.

use crate::error::Result;
use crate::output::Formatter;
use veracity_probe::ToolLocation;

/// Execute the tool command.
pub fn execute_tool(location: &ToolLocation, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_tool(location)?);
    Ok(())
}
