use airroute_core::format::OutputFormat;
use airroute_core::tree::MstAlgorithm;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse spanning tree algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<MstAlgorithm, String> {
    s.parse::<MstAlgorithm>().map_err(|e| e.to_string())
}

/// Normalize an airport code or region argument
pub fn parse_code(s: &str) -> std::result::Result<String, String> {
    let code = s.trim();
    if code.is_empty() {
        return Err("value must not be empty".to_string());
    }
    Ok(code.to_uppercase())
}
