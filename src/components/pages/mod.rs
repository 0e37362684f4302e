pub mod about;
pub mod examples;
pub mod home;
pub mod not_found;
pub mod repos;
pub mod search;
pub mod searches;

pub use about::AboutPage;
pub use examples::ExamplesPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use repos::ReposPage;
pub use search::SearchPage;
pub use searches::SearchesPage;
