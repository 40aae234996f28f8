mod footer;
mod navbar;
mod story_card;
mod toast;

pub use footer::Footer;
pub use navbar::Navbar;
pub use story_card::StoryCard;
pub use toast::ToastHost;
