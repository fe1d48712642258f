use std::borrow::Cow;

#[motif_derive::motif_error]
#[derive(PartialEq, Eq)]
pub enum SingletonError {
    /// Every slot of the [`InstanceLimit`](crate::InstanceLimit) is held by a live instance.
    #[error("Instance limit of {limit} reached{}", format_context(.context))]
    LimitExceeded { limit: usize, context: Option<Cow<'static, str>> },
}
