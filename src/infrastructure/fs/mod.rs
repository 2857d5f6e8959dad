//! File System Locations

mod home;

pub use home::{
    decorator_home_dir, default_properties_path, DECORATOR_HOME_VAR, PROPERTIES_FILE_NAME,
    PROPERTIES_PATH_VAR,
};
