use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::announce_config::AnnounceConfig;
use crate::config::structs::client_config::ClientConfig;
use crate::config::structs::configuration::Configuration;
use crate::udp::enums::announce_event::AnnounceEvent;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            client: ClientConfig::default(),
            announce: AnnounceConfig {
                tracker: String::from("udp://127.0.0.1:6969/announce"),
                info_hash: String::from("0000000000000000000000000000000000000000"),
                peer_id: String::from("-TU0100-000000000000"),
                event: AnnounceEvent::Started,
                downloaded: 0,
                left: 0,
                uploaded: 0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`.
    ///
    /// With `create` set, a missing or broken file is replaced by the default
    /// configuration, and the call still fails so the user can edit it first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} before starting again, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let check_map = vec![
            ("[LOG] Level", self.log_level.as_str(), r"^(off|trace|debug|info|warn|error)$"),
            ("[ANNOUNCE] Info hash", self.announce.info_hash.as_str(), r"^[0-9a-fA-F]{40}$"),
            ("[ANNOUNCE] Peer id", self.announce.peer_id.as_str(), r"^(.{20}|[0-9a-fA-F]{40})$"),
        ];

        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex)?;
        }

        self.announce.peer_id()?;
        if self.client.base_timeout_ms == 0 {
            return Err(ConfigurationError::ValidationError(
                String::from("[VALIDATE CONFIG] Error checking [CLIENT] Base timeout [:] must be above 0")
            ));
        }
        if let Err(error) = self.announce.tracker_address(self.client.default_tracker_port) {
            return Err(ConfigurationError::ValidationError(
                format!("[VALIDATE CONFIG] Error checking [ANNOUNCE] Tracker [:] Name: \"{}\" [:] {error}", self.announce.tracker)
            ));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(
                format!("[VALIDATE CONFIG] Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\"")
            ));
        }
        Ok(())
    }
}
