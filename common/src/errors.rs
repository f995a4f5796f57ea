// common/src/errors.rs
use thiserror::Error;

/// Failures surfaced by the session storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Portal error taxonomy. Every variant is recovered at the HTTP
/// boundary and converted to a user-facing notice.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("学号或密码错误")]
    InvalidCredentials,
    #[error("请先登录系统")]
    NotLoggedIn,
    #[error("未知的虚拟机编号")]
    UnknownVm(String),
    #[error("未知的单元名称")]
    UnknownUnit(String),
    #[error("跳转失败，请检查配置")]
    ResolutionFailed,
    #[error("登录状态保存失败")]
    Storage(#[from] StoreError),
}
