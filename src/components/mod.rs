pub mod about;
pub mod admin;
pub mod app;
pub mod audio_player;
pub mod carousel;
pub mod forms;
pub mod gallery;
pub mod home;
pub mod layout;
pub mod sermons;
pub mod video_gallery;
pub mod visit;
