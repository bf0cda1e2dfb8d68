use crate::{
    bits::BitString,
    error::{LinecodeError, LinecodeResult},
    scheme::Scheme,
};

/// Checks a plot request in the order a user fixes it: pick a scheme, type
/// something, type only bits.
pub fn validate(scheme: Option<Scheme>, text: &str) -> LinecodeResult<(Scheme, BitString)> {
    let checked = scheme
        .ok_or(LinecodeError::NoSchemeSelected)
        .and_then(|scheme| BitString::parse(text).map(|bits| (scheme, bits)));
    if let Err(e) = &checked {
        tracing::debug!(error = %e, len = text.len(), "plot request failed validation");
    }
    checked
}
