//! Home page sections, top to bottom.

mod about;
mod backend_status;
mod before_after;
mod blogs;
mod contact;
mod cta;
mod faqs;
mod featured_in;
mod hero;
mod services;
mod team;
mod testimonials;
mod video_hero;
mod why_choose_us;

pub use about::About;
pub use backend_status::BackendStatus;
pub use before_after::BeforeAfter;
pub use blogs::Blogs;
pub use contact::{validation_message, Contact};
pub use cta::Cta;
pub use faqs::Faqs;
pub use featured_in::FeaturedIn;
pub use hero::Hero;
pub use services::Services;
pub use team::Team;
pub use testimonials::Testimonials;
pub use video_hero::VideoHero;
pub use why_choose_us::WhyChooseUs;
