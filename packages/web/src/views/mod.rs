mod home;
pub use home::Home;

mod gallery;
pub use gallery::Gallery;
