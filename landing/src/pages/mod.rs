// Landing page routes
// Developed by the Meridian Web Team (c)2025

mod home;
mod login;
mod not_found;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFound;
