pub mod location_controller;
