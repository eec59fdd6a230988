// Landing page sections
// Developed by the Meridian Web Team (c)2025

mod cta;
mod features;
mod footer;
mod hero;
mod nav;
mod stats;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::HeroCarousel;
pub use nav::Nav;
pub use stats::Stats;
