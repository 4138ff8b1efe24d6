//! Login item adapter for platforms without a supported mechanism

use async_trait::async_trait;

use crate::application::ports::{Direction, LoginItemService, LoginItemStatus, RegistrationError};

/// Always disabled; every change fails
pub struct UnsupportedLoginItem;

#[async_trait]
impl LoginItemService for UnsupportedLoginItem {
    async fn status(&self) -> LoginItemStatus {
        LoginItemStatus::Disabled
    }

    async fn register(&self) -> Result<(), RegistrationError> {
        Err(RegistrationError::Unsupported {
            direction: Direction::Enable,
        })
    }

    async fn unregister(&self) -> Result<(), RegistrationError> {
        Err(RegistrationError::Unsupported {
            direction: Direction::Disable,
        })
    }
}
