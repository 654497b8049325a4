pub mod location_dto;
