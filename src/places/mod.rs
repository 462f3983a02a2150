//! Place normalization, classification, and the pipeline service

pub mod categories;
pub mod classify;
pub mod models;
pub mod normalize;
pub mod service;

pub use classify::PlaceClassifier;
pub use models::{GroupedPlaces, LatLng, Place};
pub use normalize::PlaceError;
pub use service::PlacesService;
