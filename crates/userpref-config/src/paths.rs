use std::path::PathBuf;

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

pub fn get_config_dir() -> PathBuf {
    home_dir().join(".config").join("userpref")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

pub fn get_data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("userpref")
}

pub fn get_store_dir() -> PathBuf {
    get_data_dir().join("user_pref.lmdb")
}

pub fn get_log_dir() -> PathBuf {
    get_data_dir().join("log")
}
