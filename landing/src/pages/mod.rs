// Routes

mod about;
mod blog;
mod home;
mod post;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use home::HomePage;
pub use post::PostPage;
