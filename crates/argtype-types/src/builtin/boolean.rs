use crate::{Command, CompleteHandlerResult, Type, TypeInfo, TypeValues, ValidationError, flags};

/// Boolean type.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanType;

impl Type for BooleanType {
    type Output = bool;

    fn parse(&self, info: &TypeInfo) -> Result<bool, ValidationError> {
        flags::boolean(info)
    }

    fn values(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<TypeValues> {
        Some(vec!["true".to_string(), "false".to_string()])
    }

    // Only the canonical spellings are offered, not 1/0.
    fn complete(&self, cmd: &Command, parent: Option<&Command>) -> Option<CompleteHandlerResult> {
        self.values(cmd, parent).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_canonical_spellings() {
        let cmd = Command::new("build");
        let completions = BooleanType.complete(&cmd, None).unwrap().resolve().await;
        assert_eq!(completions.values(), vec!["true".to_string(), "false".to_string()]);
    }
}
