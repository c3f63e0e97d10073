//! Parse Config from config file

use std::{collections::BTreeMap, fs::read_to_string, net::AddrParseError, path::Path, str::FromStr};

use leptos::config::LeptosOptions;
use panel_shared::{
    roles::{CombinedRole, Permission, Role},
    routes::{route_table, NOT_FOUND_PAGE},
    Session, User,
};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::LevelParseError;


const CONFIG_PATH: &str = "/etc/panel/config.toml";

#[derive(Debug)]
pub enum ConfigError {
    TomlParse(toml::de::Error),
    ConfigFileRead(std::io::Error),
    LogLevel(LevelParseError),
    SiteAddrParse(AddrParseError),
    /// The principal holds a role that is not defined under `[roles]`
    UnknownRole(String),
}
impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::TomlParse(e) => {
                write!(f, "Unable to parse config file as toml: {e}")
            }
            Self::ConfigFileRead(e) => {
                write!(f, "Unable to read config file: {e}")
            }
            Self::LogLevel(e) => {
                write!(f, "Unable to parse log_level: {e}")
            }
            Self::SiteAddrParse(e) => {
                write!(f, "Unable to interpret web.site_addr as socket address: {e}")
            }
            Self::UnknownRole(name) => {
                write!(f, "The principal has the role {name}, which is not defined under [roles]")
            }
        }
    }
}
impl From<LevelParseError> for ConfigError {
    fn from(value: LevelParseError) -> Self {
        Self::LogLevel(value)
    }
}
impl From<AddrParseError> for ConfigError {
    fn from(value: AddrParseError) -> Self {
        Self::SiteAddrParse(value)
    }
}
impl std::error::Error for ConfigError {}

#[derive(Deserialize)]
struct WebConfigData {
    /// The address to host the website on (e.g. 127.0.0.1:8080)
    site_addr: String,
}

#[derive(Deserialize)]
struct PrincipalConfigData {
    username: String,
    display_name: Option<String>,
    /// names of entries in `[roles]`; the first page of the first role is the home page
    roles: Vec<String>,
}

#[derive(Deserialize)]
struct RoleConfigData {
    /// page names, e.g. "Dashboard" or "Users"
    pages: Vec<String>,
}

/// The config data as it is present in (a well-formed) toml config file
#[derive(Deserialize)]
struct ConfigData {
    web: WebConfigData,
    log_level: Option<String>,
    principal: PrincipalConfigData,
    #[serde(default)]
    roles: BTreeMap<String, RoleConfigData>,
}

/// A page in a role definition that does not exist in the panel
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct IgnoredPage {
    pub role: String,
    pub page: String,
}

/// The main config object that will be available across the Serverside application
#[derive(Debug)]
pub struct Config {
    pub leptos_options: LeptosOptions,
    pub log_level: LevelFilter,
    pub user: User,
    /// the roles of the principal, in the order they were configured
    pub roles: Vec<Role>,
    /// pages named in a role that no route serves; they are left out of the role
    pub ignored_pages: Vec<IgnoredPage>,
}
impl Config {
    fn try_from_config_data(value: ConfigData) -> Result<Self, ConfigError> {
        let addr = std::net::SocketAddr::from_str(&value.web.site_addr)?;

        let leptos_options = LeptosOptions::builder()
            .output_name("panel")
            .site_root("target/site")
            .site_pkg_dir("pkg")
            .site_addr(addr)
            .build();
        let log_level = tracing_subscriber::filter::LevelFilter::from_str(
            &value.log_level.unwrap_or("INFO".to_string()),
        )?;

        let known_pages: Vec<String> = route_table(None)
            .into_iter()
            .map(|route| route.page_name)
            .filter(|page| !page.is_empty() && page != NOT_FOUND_PAGE)
            .collect();

        let mut roles = Vec::with_capacity(value.principal.roles.len());
        let mut ignored_pages = Vec::new();
        for name in value.principal.roles {
            let Some(role_data) = value.roles.get(&name) else {
                return Err(ConfigError::UnknownRole(name));
            };
            let (known, unknown): (Vec<&String>, Vec<&String>) =
                role_data.pages.iter().partition(|p| known_pages.contains(*p));
            ignored_pages.extend(unknown.into_iter().map(|page| IgnoredPage {
                role: name.clone(),
                page: page.clone(),
            }));
            roles.push(Role {
                permissions: known.into_iter().map(Permission::new).collect(),
                name,
            });
        }

        Ok(Self {
            leptos_options,
            log_level,
            user: User {
                username: value.principal.username,
                display_name: value.principal.display_name,
            },
            roles,
            ignored_pages,
        })
    }

    fn try_from_toml(content: &str) -> Result<Self, ConfigError> {
        let config_data: ConfigData = toml::from_str(content).map_err(ConfigError::TomlParse)?;
        Self::try_from_config_data(config_data)
    }

    pub fn try_create() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_PATH);
        let content = read_to_string(path).map_err(ConfigError::ConfigFileRead)?;
        Self::try_from_toml(&content)
    }

    /// The session handed to the client
    pub fn session(&self) -> Session {
        Session {
            user: self.user.clone(),
            combined_role: CombinedRole::combine(&self.roles),
        }
    }
}
