pub mod candidate;
pub mod category;
pub mod coordinates;
pub mod route;
pub mod spot;

pub use candidate::{PlaceCandidate, PlaceDetails};
pub use category::SpotCategory;
pub use coordinates::Coordinates;
pub use route::{DrivingRoute, RouteSearchRequest, RouteSearchResponse, SearchMode};
pub use spot::Spot;
