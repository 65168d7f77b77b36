use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// SQLite audit database path.
    pub database: String,
    /// Folder holding the roster documents.
    pub schedule_folder: String,
    /// Preferred master document file name inside `schedule_folder`.
    #[serde(default)]
    pub master_file: Option<String>,
    /// Names allowed to approve changes; injected into the front-end layer,
    /// never process-wide state.
    #[serde(default)]
    pub admins: Vec<String>,
    /// Default actor recorded when no `--by` is given.
    #[serde(default = "default_actor")]
    pub default_actor: String,
}

fn default_actor() -> String {
    "cli".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            schedule_folder: Self::config_dir()
                .join("rosters")
                .to_string_lossy()
                .to_string(),
            master_file: Some("duty_roster.json".to_string()),
            admins: Vec::new(),
            default_actor: default_actor(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdutyroster")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rdutyroster")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdutyroster.conf")
    }

    /// Return the full path of the SQLite audit database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rdutyroster.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration, schedule folder and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(db) = custom_db {
            config.database = db;
        }
        fs::create_dir_all(&config.schedule_folder)?;

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let db_path = PathBuf::from(&config.database);
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);
        println!("✅ Rosters:     {:?}", config.schedule_folder);

        Ok(())
    }
}
