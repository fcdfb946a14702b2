pub mod booking_repository;
pub mod booking_service;
pub mod booking_wizard;
pub mod catalog;
pub mod pagination;
pub mod pricing_service;
pub mod rating_service;
pub mod search_service;
