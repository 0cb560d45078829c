use evalexpr::Value;

/// Parse a numeric text field. Accepts plain numbers and simple arithmetic
/// (`2*1.5`, `(3 + 1) / 2`). Returns `None` when the text does not evaluate to
/// a finite number, so callers can keep the previous value.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = match evalexpr::eval(trimmed).ok()? {
        Value::Float(f) => f,
        Value::Int(i) => i as f64,
        _ => return None,
    };
    value.is_finite().then_some(value)
}
