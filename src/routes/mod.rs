pub mod location_routes;
