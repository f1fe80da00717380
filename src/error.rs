use thiserror::Error;

/// All errors produced by the button forge.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// The viewport range has no positive span to interpolate across.
    #[error("invalid viewport range: max ({max}px) must be greater than min ({min}px)")]
    InvalidViewport { min: f64, max: f64 },

    /// The max base size is the denominator of the scaling ratio.
    #[error("invalid base size: max base size must be greater than 0, got {max}")]
    InvalidBaseSize { max: f64 },

    /// A setting or clamp input is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Another button class already uses this name.
    #[error("button class \"{0}\" already exists")]
    DuplicateClassName(String),

    /// Class names are used verbatim as selectors.
    #[error("button class name cannot be empty")]
    EmptyClassName,

    /// No button with this id is in the working set.
    #[error("no button class with id {0}")]
    UnknownButton(u32),

    /// No button with this class name is in the working set.
    #[error("no button class named \"{0}\"")]
    UnknownClassName(String),

    /// Every `u32` id is taken up to `u32::MAX`.
    #[error("no button class id left after {}", u32::MAX)]
    IdSpaceExhausted,

    /// The project document could not be read or written.
    #[error("invalid project data: {0}")]
    Json(#[from] serde_json::Error),
}

impl ForgeError {
    /// True for the settings errors that make any CSS generation meaningless.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidViewport { .. } | Self::InvalidBaseSize { .. } | Self::NonFinite { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_message_names_both_bounds() {
        let err = ForgeError::InvalidViewport {
            min: 1620.0,
            max: 375.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("1620px"), "got: {msg}");
        assert!(msg.contains("375px"), "got: {msg}");
        assert!(err.is_configuration());
    }

    #[test]
    fn editing_errors_are_not_configuration() {
        assert!(!ForgeError::DuplicateClassName("btn-md".into()).is_configuration());
        assert!(!ForgeError::UnknownButton(7).is_configuration());
        let non_finite = ForgeError::NonFinite {
            field: "minViewport",
        };
        assert!(non_finite.is_configuration());
    }
}
