//! Plan rendering (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;

use crate::dispatch::DispatchPlan;

/// Write the resolved plan as prettified JSON followed by a newline.
pub fn write_plan_json(plan: &DispatchPlan, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}
