// Landing page sections
// Every section renders from a table in careathome_core::content.

mod about;
mod cards;
mod contact;
mod featured;
mod footer;
mod gallery;
mod hero;
mod how_it_works;
mod nav;
mod packages;
mod reveal;
mod testimonials;

pub use about::About;
pub use cards::{Safety, Services, WhyChooseUs};
pub use contact::Contact;
pub use featured::Featured;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use packages::Packages;
pub use testimonials::Testimonials;
