mod generate;
mod home;
mod library;
mod login;
mod pricing;
mod profile;
mod reader;
mod register;
mod story_detail;

pub use generate::GeneratePage;
pub use home::HomePage;
pub use library::LibraryPage;
pub use login::LoginPage;
pub use pricing::PricingPage;
pub use profile::ProfilePage;
pub use reader::ReaderPage;
pub use register::RegisterPage;
pub use story_detail::StoryDetailPage;
