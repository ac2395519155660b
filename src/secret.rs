//! Secret lookup from the process environment.

use crate::error::{Error, Result};

/// Return the named secret from the process environment.
///
/// The engine injects workspace secrets as environment variables under
/// their logical names. A variable that is unset and one set to the empty
/// string both report [`Error::SecretNotFound`]; the two cases are not
/// distinguished.
///
/// # Example
///
/// ```rust,no_run
/// let api_key = fgp_action::secret("STRIPE_API_KEY")?;
/// # Ok::<(), fgp_action::Error>(())
/// ```
pub fn secret(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::SecretNotFound(name.to_string())),
    }
}
