//! Response status envelope
//!
//! Every operation returns HTTP 200 with this envelope embedded; business
//! failures are values here, never transport faults. Code 0 is success
//! with an empty description.

use serde::{Deserialize, Serialize};

use core_kernel::error::CODE_OK;
use core_kernel::ServiceError;

/// The uniform success/error wrapper carried by every response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub code: u32,
    pub description: String,
}

impl StatusEnvelope {
    /// The success envelope
    pub fn ok() -> Self {
        Self {
            code: CODE_OK,
            description: String::new(),
        }
    }
}

impl From<&ServiceError> for StatusEnvelope {
    fn from(err: &ServiceError) -> Self {
        Self {
            code: err.code(),
            description: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_codes_match_the_taxonomy() {
        assert_eq!(StatusEnvelope::ok().code, 0);
        assert_eq!(StatusEnvelope::from(&ServiceError::invalid_argument("x")).code, 1);
        assert_eq!(StatusEnvelope::from(&ServiceError::not_found("x")).code, 2);
        assert_eq!(StatusEnvelope::from(&ServiceError::internal("x")).code, 5);
    }
}
