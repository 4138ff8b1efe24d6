//! Launch-at-login use case

use tracing::{info, warn};

use super::ports::{Direction, LoginItemService, LoginItemStatus, RegistrationError};

/// Turns launch-at-login on and off through the OS service.
///
/// The OS is the source of truth: nothing is cached, every query goes to
/// the service. Failures are logged with their direction and returned;
/// there are no retries.
pub struct LoginItemController<L: LoginItemService> {
    service: L,
}

impl<L: LoginItemService> LoginItemController<L> {
    /// Create a controller over a login item service
    pub fn new(service: L) -> Self {
        Self { service }
    }

    /// Current OS-reported status
    pub async fn status(&self) -> LoginItemStatus {
        self.service.status().await
    }

    /// Register or unregister the application.
    ///
    /// # Returns
    /// The OS-reported status after the change
    pub async fn set_enabled(&self, enabled: bool) -> Result<LoginItemStatus, RegistrationError> {
        let (direction, result) = if enabled {
            (Direction::Enable, self.service.register().await)
        } else {
            (Direction::Disable, self.service.unregister().await)
        };

        if let Err(e) = result {
            warn!(direction = %direction, error = %e, "launch at login change failed");
            return Err(e);
        }

        let status = self.service.status().await;
        info!(direction = %direction, status = %status, "launch at login updated");
        Ok(status)
    }

    /// Flip the current registration
    pub async fn toggle(&self) -> Result<LoginItemStatus, RegistrationError> {
        let current = self.service.status().await;
        self.set_enabled(!current.is_enabled()).await
    }
}
