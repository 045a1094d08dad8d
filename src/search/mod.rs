pub mod controller;
pub mod photon;
pub mod place;
pub mod provider;

pub use controller::SearchBarController;
pub use photon::{PhotonOptions, PhotonProvider};
pub use place::{Geometry, Place};
pub use provider::SearchProvider;
