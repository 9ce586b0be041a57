use thiserror::Error;

/// 以字串 key 選擇模型或資料集時的錯誤。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown IMF model '{0}'")]
    UnknownModel(String),
    #[error("unknown {kind} key '{key}'")]
    UnknownKey {
        kind: &'static str,
        key: String
    },
    #[error("invalid parameters: {0}")]
    InvalidParameters(String)
}

impl SelectionError {
    pub fn unknown_key(kind: &'static str, key: &str) -> SelectionError {
        SelectionError::UnknownKey { kind, key: key.to_owned() }
    }
}
