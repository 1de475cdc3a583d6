/// Reasons a host could not be subscribed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationError {
    NoHostWindow,
    NoHostDocument,
    MissingElement { id: String },
    Subscribe { event: &'static str, reason: String },
}

impl std::fmt::Display for ActivationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivationError::NoHostWindow => write!(f, "no host window available"),
            ActivationError::NoHostDocument => write!(f, "no host document available"),
            ActivationError::MissingElement { id } => write!(f, "element `#{id}` not found"),
            ActivationError::Subscribe { event, reason } => {
                write!(f, "failed to subscribe to `{event}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ActivationError {}
