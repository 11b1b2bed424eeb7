//! Error types for processing steps and pipelines.

use thiserror::Error;

/// Boxed error returned by user-supplied frame functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for processing operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid parameter value, detected when the step is applied.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A 2D shape does not match the frames it is applied to.
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    ShapeMismatch {
        /// Frame (rows, cols)
        expected: (usize, usize),
        /// Offending (rows, cols)
        got: (usize, usize),
    },

    /// Normalization would divide by a zero-width intensity range.
    #[error("degenerate intensity range [{min}, {max}] in {stage}")]
    DegenerateRange {
        /// Lower bound of the range
        min: f64,
        /// Upper bound of the range
        max: f64,
        /// Which normalization failed
        stage: &'static str,
    },

    /// A user-supplied frame function failed.
    #[error("function step '{name}' failed on frame {frame}: {source}")]
    Function {
        /// Step name
        name: String,
        /// Frame index being processed
        frame: usize,
        /// Error returned by the function
        #[source]
        source: BoxError,
    },

    /// A pipeline step failed; the remaining steps were not run.
    #[error("step {index} ({name}) failed: {source}")]
    Step {
        /// Position of the step in the pipeline
        index: usize,
        /// Step name
        name: String,
        /// Underlying failure
        #[source]
        source: Box<OpsError>,
    },

    /// Core data model error.
    #[error(transparent)]
    Core(#[from] postproc_core::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl OpsError {
    /// Returns the innermost error, unwrapping pipeline step context.
    pub fn root(&self) -> &OpsError {
        match self {
            Self::Step { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for processing operations.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_root() {
        let inner = OpsError::InvalidParameter("bins must be > 0".into());
        let err = OpsError::Step {
            index: 1,
            name: "quantize".into(),
            source: Box::new(inner),
        };
        assert!(err.to_string().contains("step 1 (quantize)"));
        assert!(matches!(err.root(), OpsError::InvalidParameter(_)));
    }

    #[test]
    fn test_core_conversion() {
        let core = postproc_core::Error::shape_mismatch((4, 4), (4, 5));
        let err: OpsError = core.into();
        assert!(err.to_string().contains("4x5"));
    }
}
