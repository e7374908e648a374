//! Level-source documents
//!
//! A level source is a JSON array of plans, each plan an array of row strings:
//!
//! ```json
//! [["     v", "@  o  ", "xxxxxx"], ["@ = o", "xx!xx"]]
//! ```

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SimError};

/// One level plan: rows of symbols, top row first
pub type Plan = Vec<String>;

/// Built-in plans used when no level file is given
pub const DEMO_LEVELS: &[&[&str]] = &[
    &[
        "                      ",
        "                      ",
        "  |           o   o   ",
        "  x         xxxxxxxx  ",
        "  x      = x          ",
        "  x @    o x   o      ",
        "  xxxxxxxxxx xxxxxxxx ",
        "  x!!!!!!!!!!!!!!!!!x ",
        "                      ",
    ],
    &[
        "      v               ",
        "                 v    ",
        "  o      =       o    ",
        "  x            xxx    ",
        "     @    xx  o       ",
        "  xxxxx!!!!!xxxxxxxxx ",
        "                      ",
    ],
];

/// The demo plans as owned rows
pub fn demo_plans() -> Vec<Plan> {
    DEMO_LEVELS
        .iter()
        .map(|plan| plan.iter().map(|row| row.to_string()).collect())
        .collect()
}

/// Decode a level-source document
pub fn plans_from_json(json: &str) -> Result<Vec<Plan>> {
    let value: Value = serde_json::from_str(json)?;
    plans_from_value(&value)
}

/// Read and decode a level-source file
pub fn load_plans(path: impl AsRef<Path>) -> Result<Vec<Plan>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let plans = plans_from_json(&json)?;
    log::info!("Loaded {} levels from {}", plans.len(), path.display());
    Ok(plans)
}

/// Check the shape of an already parsed document
pub fn plans_from_value(value: &Value) -> Result<Vec<Plan>> {
    let Value::Array(plans) = value else {
        return Err(SimError::type_argument("array of plans", kind_of(value)));
    };
    plans.iter().map(plan_from_value).collect()
}

fn plan_from_value(value: &Value) -> Result<Plan> {
    let Value::Array(rows) = value else {
        return Err(SimError::type_argument("plan (array of rows)", kind_of(value)));
    };
    rows.iter()
        .map(|row| match row {
            Value::String(row) => Ok(row.clone()),
            other => Err(SimError::type_argument("row string", kind_of(other))),
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
