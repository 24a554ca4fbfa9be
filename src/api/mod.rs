pub mod codeforces_client;
pub mod handlers;
pub mod models;
pub mod routes;

pub use codeforces_client::CodeforcesClient;
