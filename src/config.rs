use crate::catalog::{FilterCriteria, PriceRange, SortKey, StatusFilter, DEFAULT_PAGE_SIZE};
use anyhow::{bail, Context, Result};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

#[derive(Debug)]
pub struct Config {
    /// Catalog JSON file; the built-in sample catalog when unset
    pub catalog_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub page_size: usize,
    pub page: usize,
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub menu_open_delay: Duration,
    pub menu_close_delay: Duration,
}

impl Config {
    /// Read `PROPERTY_DESK_*` and `ACCOUNT_MENU_*` variables, after loading
    /// `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable source; `from_env` passes the process
    /// environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let page_size: usize = vars.try_load("PROPERTY_DESK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            bail!("PROPERTY_DESK_PAGE_SIZE must be greater than 0");
        }

        let criteria = FilterCriteria {
            status: vars.try_load("PROPERTY_DESK_STATUS", StatusFilter::All)?,
            selected_types: Default::default(),
            location_search: vars.var("PROPERTY_DESK_LOCATION").unwrap_or_default(),
            price_range: PriceRange::new(
                vars.try_load("PROPERTY_DESK_MIN_PRICE", 0)?,
                vars.try_load("PROPERTY_DESK_MAX_PRICE", i64::MAX)?,
            ),
        };

        Ok(Self {
            catalog_path: vars.var("PROPERTY_DESK_CATALOG").map(PathBuf::from),
            output_path: vars
                .var("PROPERTY_DESK_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("catalog_page.json")),
            page_size,
            page: vars.try_load("PROPERTY_DESK_PAGE", 1)?,
            criteria,
            sort: vars.try_load("PROPERTY_DESK_SORT", SortKey::Relevance)?,
            menu_open_delay: Duration::from_millis(vars.try_load("ACCOUNT_MENU_OPEN_DELAY_MS", 150)?),
            menu_close_delay: Duration::from_millis(vars.try_load("ACCOUNT_MENU_CLOSE_DELAY_MS", 200)?),
        })
    }
}

struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    fn try_load<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr + std::fmt::Debug,
        T::Err: Display,
    {
        match self.var(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e: T::Err| anyhow::anyhow!("{}", e))
                .with_context(|| format!("Invalid {} value: {}", key, raw)),
            None => {
                info!("{key} not set, using default: {default:?}");
                Ok(default)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.page, 1);
        assert_eq!(config.sort, SortKey::Relevance);
        assert_eq!(config.criteria, FilterCriteria::default());
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.output_path, PathBuf::from("catalog_page.json"));
        assert_eq!(config.menu_open_delay, Duration::from_millis(150));
        assert_eq!(config.menu_close_delay, Duration::from_millis(200));
    }

    #[test]
    fn search_variables_reach_criteria() {
        let config = load(&[
            ("PROPERTY_DESK_STATUS", "sale"),
            ("PROPERTY_DESK_LOCATION", "Gaborone"),
            ("PROPERTY_DESK_MIN_PRICE", "500000"),
            ("PROPERTY_DESK_MAX_PRICE", "800000"),
            ("PROPERTY_DESK_SORT", "price_desc"),
            ("ACCOUNT_MENU_OPEN_DELAY_MS", "0"),
        ])
        .unwrap();

        assert_eq!(config.criteria.status, StatusFilter::Sale);
        assert_eq!(config.criteria.location_search, "Gaborone");
        assert_eq!(config.criteria.price_range, PriceRange::new(500_000, 800_000));
        assert_eq!(config.sort, SortKey::PriceDesc);
        assert_eq!(config.menu_open_delay, Duration::ZERO);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = load(&[("PROPERTY_DESK_MAX_PRICE", "  "), ("PROPERTY_DESK_CATALOG", "")]).unwrap();
        assert_eq!(config.criteria.price_range.max, i64::MAX);
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn rejects_garbage() {
        let err = load(&[("PROPERTY_DESK_PAGE", "two")]).unwrap_err();
        assert!(err.to_string().contains("PROPERTY_DESK_PAGE"));

        let err = load(&[("PROPERTY_DESK_MIN_PRICE", "cheap")]).unwrap_err();
        assert!(err.to_string().contains("PROPERTY_DESK_MIN_PRICE"));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = load(&[("PROPERTY_DESK_PAGE_SIZE", "0")]).unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn debug_output_names_fields() {
        let rendered = format!("{:?}", load(&[("PROPERTY_DESK_PAGE_SIZE", "9")]).unwrap());
        assert!(rendered.contains("page_size: 9"));
    }

    // The only test that touches the process environment.
    #[test]
    fn from_env_rejects_zero_page_size() {
        env::set_var("PROPERTY_DESK_PAGE_SIZE", "0");
        let result = Config::from_env();
        env::remove_var("PROPERTY_DESK_PAGE_SIZE");

        assert!(result.is_err());
    }
}
