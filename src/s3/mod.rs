pub mod client;
pub mod download;
pub mod models;
pub mod upload;

// Re-export the facade for convenient access from the transfer operations
pub use models::S3StorageClient;
