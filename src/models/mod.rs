//! TonicPow API model types.

mod advertiser;
mod campaign;
mod conversion;
mod goal;
mod link;
mod rate;
mod session;
mod user;

pub use advertiser::*;
pub use campaign::*;
pub use conversion::*;
pub use goal::*;
pub use link::*;
pub use rate::*;
pub use session::*;
pub use user::*;

use crate::error::{Result, TonicPowError};

/// Fields equal to their default are left out of request payloads.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Reject a call the API would reject anyway.
pub(crate) fn ensure(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(TonicPowError::InvalidArgument(message.to_string()))
    }
}
