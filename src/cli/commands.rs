use crate::core::api::{ConvertOps, ConvertSummary};
use crate::core::config::ConvertConfig;
use crate::error::types::Result;

pub fn convert(api: &dyn ConvertOps, config: &ConvertConfig, dump: bool) -> Result<ConvertSummary> {
    let summary = api.run(config)?;
    if dump {
        println!("{}", format_dump(summary.bytes.as_bytes()));
    }
    Ok(summary)
}

/// Render bytes as `[0, 0, 16, 255]`.
pub fn format_dump(bytes: &[u8]) -> String {
    let body = bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", body)
}
