pub mod errors;
pub mod dto;
pub mod address_service;
pub mod catalog_service;
pub mod context;
pub mod gallery_service;
pub mod master_service;
pub mod review_service;
