use std::fmt;
use thiserror::Error;

/// Which list an out-of-range index pointed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    Criterion,
    Level,
    Item,
    Dimension,
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Criterion => "criterion",
            Self::Level => "level",
            Self::Item => "item",
            Self::Dimension => "dimension",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("{target} index {index} out of range (len {len})")]
    OutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid methodology document: {0}")]
    InvalidDocument(String),

    #[error("methodology structure changed: {0}")]
    StructureChanged(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;

/// Bounds-checks `index` against a list of `len` entries.
pub(crate) fn check_index(target: IndexTarget, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(EvalError::OutOfRange { target, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_target_and_bounds() {
        let err = check_index(IndexTarget::Criterion, 2, 2).expect_err("index 2 of 2 is invalid");
        assert_eq!(err.to_string(), "criterion index 2 out of range (len 2)");
    }

    #[test]
    fn check_index_accepts_last_position() {
        assert!(check_index(IndexTarget::Level, 2, 3).is_ok());
    }
}
