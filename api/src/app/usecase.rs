//! Use case execution logging
//!
//! Wraps each use case run with a start line and a SUCCEED/FAILED line.

use std::fmt;
use std::future::Future;

use crate::error::{DomainError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCaseAction {
    Create,
    Update,
    Delete,
    Retrieve,
    List,
}

impl fmt::Display for UseCaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseCaseAction::Create => write!(f, "create"),
            UseCaseAction::Update => write!(f, "update"),
            UseCaseAction::Delete => write!(f, "delete"),
            UseCaseAction::Retrieve => write!(f, "retrieve"),
            UseCaseAction::List => write!(f, "list"),
        }
    }
}

/// Identifies a use case in logs, rendered as `<CREATE BREED>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCaseInfo {
    pub action: UseCaseAction,
    pub entity: &'static str,
}

impl UseCaseInfo {
    pub const fn breed(action: UseCaseAction) -> Self {
        Self {
            action,
            entity: "breed",
        }
    }
}

impl fmt::Display for UseCaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} {}>",
            self.action.to_string().to_uppercase(),
            self.entity.to_uppercase()
        )
    }
}

/// Run a use case and log its outcome
pub async fn run<T, F>(info: UseCaseInfo, use_case: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    tracing::info!("Execute usecase {}", info);

    let result = use_case.await;

    match &result {
        Ok(_) => tracing::info!("Usecase {} [SUCCEED]", info),
        Err(e) if e.kind() == ErrorKind::Internal => {
            tracing::error!(error = %e, "Usecase {} [FAILED]", info)
        }
        Err(e) => tracing::warn!(error = %e, "Usecase {} [FAILED]", info),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_display() {
        assert_eq!(
            UseCaseInfo::breed(UseCaseAction::Create).to_string(),
            "<CREATE BREED>"
        );
        assert_eq!(
            UseCaseInfo::breed(UseCaseAction::Retrieve).to_string(),
            "<RETRIEVE BREED>"
        );
    }

    #[tokio::test]
    async fn run_passes_result_through() {
        let ok = run(UseCaseInfo::breed(UseCaseAction::List), async { Ok(3) }).await;
        assert_eq!(ok.unwrap(), 3);

        let err: Result<(), _> = run(UseCaseInfo::breed(UseCaseAction::Delete), async {
            Err(DomainError::NothingTodo)
        })
        .await;
        assert_eq!(err.unwrap_err().kind(), ErrorKind::NothingTodo);
    }
}
