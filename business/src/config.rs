use std::any::Any;
use std::env::vars;

use anyhow::bail;
use log::info;
use serde::Deserialize;
use userdeck_states::{State, state_assign_impl};
use ustr::Ustr;

/// Prefix of the environment variables read by [`BusinessConfig::from_env`].
pub const ENV_PREFIX: &str = "USERDECK_";

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Records per page requested from the listing endpoint.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    api_base_url: Ustr,
    page_size: usize,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    page_size: Option<usize>,
}

impl BusinessConfig {
    /// Config pointing at `base_url` with the default page size.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            api_base_url: Ustr::from(base_url.as_ref().trim_end_matches('/')),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Reads `USERDECK_API_BASE_URL` and `USERDECK_PAGE_SIZE`, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_vars(vars())
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> anyhow::Result<Self> {
        let scoped = vars.into_iter().filter_map(|(key, value)| {
            key.strip_prefix(ENV_PREFIX)
                .map(|stripped| (stripped.to_string(), value))
        });
        let raw: RawConfig = serde_env::from_iter(scoped)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            api_base_url,
            page_size,
        } = raw;

        let api_base_url = match api_base_url {
            Some(url) if url.trim().is_empty() => bail!("{ENV_PREFIX}API_BASE_URL must not be empty"),
            Some(url) => {
                info!("Using provided API base url: {url}");
                url
            }
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let page_size = match page_size {
            Some(0) => bail!("{ENV_PREFIX}PAGE_SIZE must be greater than zero"),
            Some(size) => size,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self::new(api_base_url.trim()).with_page_size(page_size))
    }

    pub fn api_base_url(&self) -> Ustr {
        self.api_base_url
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `GET {base}/users?_limit={page_size}&_page={page}`
    pub fn users_url(&self, page: u32) -> String {
        format!(
            "{}/users?_limit={}&_page={}",
            self.api_base_url, self.page_size, page
        )
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_env() {
        let config = BusinessConfig::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(config, BusinessConfig::default());
        assert_eq!(config.page_size(), 5);
        assert_eq!(config.api_base_url().as_str(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn reads_prefixed_vars() {
        let config = BusinessConfig::from_vars(vars(&[
            ("USERDECK_API_BASE_URL", "http://localhost:3000/"),
            ("USERDECK_PAGE_SIZE", "10"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url().as_str(), "http://localhost:3000");
        assert_eq!(config.page_size(), 10);
    }

    #[test]
    fn rejects_zero_page_size() {
        let result = BusinessConfig::from_vars(vars(&[("USERDECK_PAGE_SIZE", "0")]));
        assert!(result.unwrap_err().to_string().contains("PAGE_SIZE"));
    }

    #[test]
    fn rejects_blank_base_url() {
        let result = BusinessConfig::from_vars(vars(&[("USERDECK_API_BASE_URL", "  ")]));
        assert!(result.unwrap_err().to_string().contains("API_BASE_URL"));
    }

    #[test]
    fn users_url_carries_limit_and_page() {
        let config = BusinessConfig::new("https://example.com/");
        assert_eq!(
            config.users_url(3),
            "https://example.com/users?_limit=5&_page=3"
        );
    }
}
