//! Built-in icon assets and their components.

mod google_drive;

pub use google_drive::{GoogleDriveAsset, GoogleDriveIcon};
