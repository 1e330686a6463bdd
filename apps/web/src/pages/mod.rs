mod home;
mod section;

pub use home::HomePage;
pub use section::SectionPage;
