use crate::engine::clear_selections;
use crate::error::{EvalError, Result};
use crate::types::methodology::Methodology;
use sha2::{Digest, Sha256};

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

/// SHA-256 of the methodology with its selection overlay stripped. Two
/// documents share a fingerprint exactly when they differ only in
/// `selected`/`checked` state.
pub fn structure_fingerprint(methodology: &Methodology) -> Result<String> {
    let structure = clear_selections(methodology);
    let bytes = serde_json::to_vec(&structure)?;
    Ok(sha256_hex(&bytes))
}

/// Fails with `StructureChanged` if `evaluated` is not `published` plus a
/// selection overlay.
pub fn verify_structure(published: &Methodology, evaluated: &Methodology) -> Result<String> {
    if published.kind() != evaluated.kind() {
        return Err(EvalError::StructureChanged(format!(
            "methodology type changed from {} to {}",
            published.kind(),
            evaluated.kind()
        )));
    }
    let expected = structure_fingerprint(published)?;
    let actual = structure_fingerprint(evaluated)?;
    if expected != actual {
        return Err(EvalError::StructureChanged(format!(
            "expected fingerprint {expected}, found {actual}"
        )));
    }
    tracing::debug!(fingerprint = %expected, "structure verified");
    Ok(expected)
}
