pub mod openrouteservice;

pub use openrouteservice::OpenRouteService;
