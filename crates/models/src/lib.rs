pub mod errors;
pub mod db;
pub mod address;
pub mod master;
pub mod social;
pub mod gallery_image;
pub mod review;
pub mod service;
pub mod service_subsection;
pub mod price_item;

#[cfg(test)]
mod tests;
